// salvage/examples/null_safety.rs

use salvage::{elvis, first_non_null, safe_call, Required};
use tracing::info;

#[derive(Clone, Debug, Default)]
struct Order {
  customer: Option<Customer>,
}

#[derive(Clone, Debug, Default)]
struct Customer {
  email: Option<String>,
  phone: Option<String>,
}

fn email_of(order: Order) -> anyhow::Result<Option<String>> {
  Ok(order.customer.required("order.customer")?.email)
}

fn phone_of(order: Order) -> anyhow::Result<Option<String>> {
  Ok(order.customer.required("order.customer")?.phone)
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Null Safety Example ---");

  let anonymous = Order::default();
  let phone_only = Order {
    customer: Some(Customer {
      email: None,
      phone: Some("+46 70 000 00 00".to_string()),
    }),
  };

  // Safe call: `order?.customer?.email`
  let order = anonymous.clone();
  info!("safe_call: {:?}", safe_call(move || email_of(order))?);

  // Elvis: `order?.customer?.email ?: "unknown"`
  let order = anonymous.clone();
  info!("elvis: {}", elvis(move || email_of(order), "unknown".to_string())?);

  // First non-null: email, then phone, then a constant
  let (by_email, by_phone) = (phone_only.clone(), phone_only);
  let contact = first_non_null!(
    move || email_of(by_email),
    move || phone_of(by_phone),
    || Ok(Some("no contact".to_string())),
  )?;
  info!("first_non_null: {:?}", contact);

  Ok(())
}
