use clap::Parser;

#[derive(Parser)]
#[command(name = "storefront-cart")]
#[command(about = "An interactive shopping cart for the storefront catalog")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Product catalog file (JSON array of {name, price} objects)
    #[arg(short, long)]
    pub catalog: Option<String>,
}
