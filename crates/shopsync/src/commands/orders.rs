//! Customer order command handlers. Read-only.

use tabled::Tabled;

use shopsync_core::{Console, Order};

use crate::cli::{GlobalOpts, OrdersArgs, OrdersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Telephone")]
    telephone: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Postcode")]
    postcode: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Date Added")]
    date_added: String,
}

impl From<&Order> for OrderRow {
    fn from(o: &Order) -> Self {
        Self {
            customer: o.firstname.clone(),
            email: o.email.clone(),
            telephone: o.telephone.clone(),
            address: o.payment_address_1.clone(),
            city: o.payment_city.clone(),
            postcode: o.payment_postcode.clone(),
            country: o.payment_country.clone(),
            total: format!("${}", o.total),
            date_added: o
                .date_added
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        }
    }
}

pub async fn handle(
    console: &mut Console,
    args: OrdersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let orders = &mut console.orders;

    match args.command {
        OrdersCommand::List => {
            let ok = orders.refresh().await;
            util::check_refresh(ok, orders.last_error())?;
            let out = output::render_list(global.output, orders.items(), |o| OrderRow::from(o), |o| {
                o.email.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
