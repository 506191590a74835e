use std::env::args;
use std::process::ExitCode;

use common_lib::collections::{FeatureSet, LowercaseMap};
use common_lib::env::{Environment, SystemEnvironment};
use common_lib::fs::{DEFAULT_DELIMITER, parse_file};
use common_lib::os::{get_groups, get_netdevs};
use common_lib::storage::Storage;
use common_lib::string::{Padding, scan, unquoted};
use common_lib::time::{get_millis, time_str, uptime_str};
use common_lib::units::{human_readable, mem_to_str};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Feature {
    Color,
    Unicode,
    Verbose,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("\n[LowercaseMap]\n");

    let mut headers = LowercaseMap::new();
    headers.insert("Content-Type", "text/plain");
    headers.insert("X-Request-ID", "42");
    headers.insert("CONTENT-TYPE", "application/json");
    println!("{headers}");
    println!("{:?}", headers.get("content-type"));

    println!("\n[FeatureSet]\n");

    let mut features = FeatureSet::from([Feature::Verbose]);
    features += Feature::Color;
    features += Feature::Unicode;
    features -= Feature::Verbose;
    println!("{features:?} (color: {})", features.has(&Feature::Color));

    println!("\n[Storage]\n");

    let memory = Storage::new(16_384_000u64);
    println!("{} kb = {} mb = {} gb", memory.kb(), memory.mb(), memory.gb());
    println!("{} / {}", human_readable(1_572_864.0), mem_to_str(1_572_864.0, true));

    println!("\n[Strings]\n");

    let (mut word, mut number) = (String::new(), 0u32);
    let captured = scan("test 1 2 hello world 7 ", &mut [(3, &mut word), (5, &mut number)]);
    println!("captured {captured}: {word:?} {number}");
    println!("[{}]", Padding::new(8).pad(&unquoted("'quoted'", true)));

    println!("\n[Time]\n");

    let env = SystemEnvironment;
    println!("now: {} ({} ms)", time_str(get_millis() / 1000), get_millis());
    println!("timezone offset: {}s", env.timezone_offset());
    println!("uptime: {} / {}", uptime_str(93_784, false, true), uptime_str(93_784, true, true));
    if let Some(name) = env.self_basename() {
        println!("running as {}", name.display());
    }

    println!("\n[OS]\n");

    match get_groups() {
        Ok(groups) => println!("groups: {groups:?}"),
        Err(e) => error!("{e}"),
    }
    match get_netdevs() {
        Ok(devices) => println!("network devices: {devices:?}"),
        Err(e) => error!("{e}"),
    }

    if let Some(path) = args().nth(1) {
        println!("\n[{path}]\n");

        match parse_file(&path, DEFAULT_DELIMITER) {
            Ok(entries) => {
                info!(entries = entries.len(), "parsed {path}");
                for (key, value) in &entries {
                    println!("{key} = {value}");
                }
            },
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}
