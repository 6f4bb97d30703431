use std::error::Error;
use subnet_divider::output::{print_subnet_table, subnets_to_json};
use subnet_divider::{divide_cidr, into_cidr, shift_cidr};

const USAGE: &str = "usage: subnet-divider <a.b.c.d/n> <shift|into|divide> <value> [--json]";

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }
    let (cidr, mode, value) = (args[1].as_str(), args[2].as_str(), args[3].as_str());

    let subnets = match mode {
        "shift" => shift_cidr(cidr, value.parse()?)?,
        "into" => into_cidr(cidr, value.parse()?)?,
        "divide" => divide_cidr(cidr, value.parse()?)?.collect(),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    if args.iter().any(|a| a == "--json") {
        println!("{}", subnets_to_json(&subnets)?);
    } else {
        print_subnet_table(&subnets);
    }

    Ok(())
}
