use gosub_bootstrap::location::Location;
use gosub_bootstrap::logging::{init_logger, GlobalLogSink};
use gosub_bootstrap::options::{OptionsResolver, StaticDocument, DEFAULT_SETTINGS_ATTRIBUTE, DEFAULT_SETTINGS_ELEMENT_ID};

// Usage: cargo run --example resolve_options -- <href> [embedded-json]
//
//   cargo run --example resolve_options -- \
//       'https://example.com/app/index.html?options={"logLevel":1}' \
//       '{"base":"sub","staticBase":"../static"}'
fn main() -> anyhow::Result<()> {
    init_logger();

    let mut args = std::env::args().skip(1);
    let href = args
        .next()
        .unwrap_or_else(|| "https://example.com/app/index.html".to_string());

    // Without a second argument the document carries no embedded settings.
    let mut document = StaticDocument::new();
    if let Some(embedded) = args.next() {
        document.set_attribute(
            DEFAULT_SETTINGS_ELEMENT_ID.to_string(),
            DEFAULT_SETTINGS_ATTRIBUTE.to_string(),
            embedded,
        );
    }

    let config = OptionsResolver::builder()
        .location(Location::parse(&href)?)
        .document(&document)
        .log_sink(&GlobalLogSink)
        .build()?
        .resolve()?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
