use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    sales_insights::example_apps::run_sales_report(std::env::args().skip(1))
}
