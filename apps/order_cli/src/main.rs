use anyhow::{bail, Context, Result};
use clap::Parser;
use order_core::{OrderForm, SubmitOutcome};
use shared::{catalog, domain::ToppingId, error::OrderError};
use tracing_subscriber::EnvFilter;

/// Place a Bloom Pizza order from the command line.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    name: String,
    /// One of S, M, L.
    #[arg(long)]
    size: String,
    /// Topping id (1-5) or name; repeat for more toppings.
    #[arg(long = "topping")]
    toppings: Vec<String>,
    /// Print the placed order as JSON instead of the confirmation text.
    #[arg(long)]
    json: bool,
}

fn resolve_topping(raw: &str) -> Result<ToppingId, OrderError> {
    if let Some(topping) = catalog::find_by_name(raw) {
        return Ok(topping.id);
    }
    let id = ToppingId::parse(raw)?;
    if catalog::contains(id) {
        Ok(id)
    } else {
        Err(OrderError::UnknownTopping(id))
    }
}

fn fill_form(args: &Args) -> Result<OrderForm> {
    let mut form = OrderForm::new();
    form.set_full_name(&args.name);
    form.select_size(&args.size);
    for raw in &args.toppings {
        let id = resolve_topping(raw).with_context(|| format!("unrecognized topping '{raw}'"))?;
        if !form.draft().is_selected(id) {
            form.toggle_topping(id)?;
        }
    }
    Ok(form)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    tracing::debug!(?args, "placing order from command line");

    let mut form = fill_form(&args)?;
    match form.submit() {
        SubmitOutcome::Placed(order) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&order)?);
            } else if let Some(confirmation) = form.confirmation() {
                println!("{confirmation}");
            }
            Ok(())
        }
        SubmitOutcome::Ignored | SubmitOutcome::Rejected(_) => {
            for (field, err) in form.errors().iter() {
                eprintln!("{}: {err}", field.key());
            }
            bail!("order was not placed");
        }
    }
}
