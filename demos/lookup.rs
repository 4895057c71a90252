use cascade_config::{Config, ConfigBuilder, Context, DirectoryLayout, Scope};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Deserialize)]
struct Flood {
    lines: u32,
    seconds: f64,
}

fn main() -> Result<(), cascade_config::ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let layout = DirectoryLayout::new("demos/conf");

    let config = Config::builder().with_file_list(layout.clone()).build()?;
    let ctx = Context::new()
        .with("network", "libera")
        .with("source", "bot")
        .with("target", "rust");

    println!("nick:     {}", config.lookup_string(&ctx, "nick")?);
    println!("retries:  {}", config.lookup_int(&ctx, "retries")?);
    println!("servers:  {:?}", config.lookup_string_slice(&ctx, "servers")?);
    println!("admins:   {:?}", config.lookup_string_set(&ctx, "admins")?);
    println!("greeting: {}", config.lookup_string(&ctx, "greeting")?);

    if let Some(flood) = config.lookup_as::<Flood>(&ctx, "flood")? {
        println!("flood:    {} lines per {}s", flood.lines, flood.seconds);
    }

    // The same layout, keyed by the fixed scope record.
    let scoped = ConfigBuilder::<Scope>::new().with_file_list(layout).build()?;
    let elsewhere = Scope::new("oftc", "bot", "rust");
    println!("oftc nick: {}", scoped.lookup_string(&elsewhere, "nick")?);
    println!("{scoped:?}");

    Ok(())
}
