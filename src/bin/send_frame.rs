use clap::Parser;
use rtos_tools::adapters::datalink;
use rtos_tools::core::frame::hex_dump;
use rtos_tools::utils::{error::ToolError, logger, validation::Validate};
use rtos_tools::{DatalinkInterface, EthernetFrame, FrameSender, SendFrameConfig};

fn main() {
    let config = SendFrameConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    match run(&config) {
        Ok(frame) => {
            tracing::info!(
                "✅ {} -> {} ({} payload bytes)",
                frame.source,
                frame.destination,
                frame.payload.len()
            );
        }
        Err(e) => exit_with(&e),
    }
}

fn run(config: &SendFrameConfig) -> rtos_tools::Result<EthernetFrame> {
    let destination = config.destination_mac()?;
    let payload = config.payload.as_bytes();

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - frame is not sent");
        let source = match config.source_mac()? {
            Some(mac) => mac,
            None => datalink::interface_mac(&config.interface)?,
        };
        let frame = EthernetFrame::new(destination, source, payload)
            .with_ethertype(config.ethertype_value()?);
        print!("{}", hex_dump(&frame.to_bytes()));
        return Ok(frame);
    }

    let link = DatalinkInterface::open(&config.interface)?;
    let mut sender = FrameSender::new(link)
        .with_source(config.source_mac()?)
        .with_ethertype(config.ethertype_value()?);
    sender.send(destination, payload)
}

fn exit_with(e: &ToolError) -> ! {
    tracing::error!(
        "❌ send-frame failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}
