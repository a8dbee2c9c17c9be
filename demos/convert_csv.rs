use bank_statement_ofx::ConverterBuilder;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let file_path = if args.len() > 1 {
        &args[1]
    } else {
        println!("Using example CSV data from demos/sample.csv\n");
        "demos/sample.csv"
    };

    let summary = ConverterBuilder::new()
        .source(file_path)
        .output_dir("ofx")
        .convert_decimal_separator(true)
        .convert_date_format(true)
        .convert()?;

    println!("{}", summary);
    Ok(())
}
