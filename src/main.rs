use std::process;

use consistent_ring::{log, HashRing, RingConfig};

fn main() {
    log::init_logger();
    let config = match RingConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            ::log::error!("{}", err);
            process::exit(1);
        }
    };
    let mut ring = match HashRing::from_config(&config) {
        Ok(ring) => ring,
        Err(err) => {
            ::log::error!("{}", err);
            process::exit(1);
        }
    };

    ::log::info!("Ring created with {} replicas per server", ring.replicas());

    ring.add_servers(["server-a", "server-b", "server-c"]);
    println!("{}", ring);

    let keys = ["user:1", "user:2", "session:42", "cart:7"];
    for key in keys {
        println!("{} [{}] -> {:?}", key, ring.hash(key.as_bytes()), ring.resolve(key));
    }

    ring.remove_server("server-b");
    println!("after removing server-b: {}", ring);
    for key in keys {
        println!("{} -> {:?}", key, ring.resolve(key));
    }
}
