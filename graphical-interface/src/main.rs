use std::{env, net::Ipv4Addr, process, str::FromStr};

use graphical_interface::AerotrackApp;
use search_client::AerotrackClient;

fn main() -> Result<(), eframe::Error> {
    let ip = match env::args().nth(1) {
        Some(arg) => match Ipv4Addr::from_str(&arg) {
            Ok(ip) => ip,
            Err(_) => {
                eprintln!("invalid scan service address: {}", arg);
                process::exit(1);
            }
        },
        None => Ipv4Addr::LOCALHOST,
    };

    let client = match AerotrackClient::connect(ip) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("could not reach the scan service at {}: {}", ip, err);
            process::exit(1);
        }
    };

    eframe::run_native(
        "AeroTrack Flight Scanner",
        Default::default(),
        Box::new(|_cc| Ok(Box::new(AerotrackApp::new(client)))),
    )
}
