use clap::Parser;
use rbtree::cli::commands::execute_command;
use rbtree::cli::output;
use rbtree::cli::Cli;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    match execute_command(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::error(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    // Log initial debug level
    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbtree::util::testing;
    use tracing::info;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
        info!("Debug mode: info");
    }

    #[test]
    fn given_negative_values_when_parsing_then_accepted() {
        let cli = Cli::try_parse_from(["rbtree", "find", "-3", "5", "-3", "0"]).unwrap();
        match cli.command {
            Some(rbtree::cli::Commands::Find { needle, values }) => {
                assert_eq!(needle, -3);
                assert_eq!(values.values, vec![5, -3, 0]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn given_order_flag_when_parsing_then_uses_traversal_names() {
        let cli = Cli::try_parse_from(["rbtree", "walk", "--order", "post", "1", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(rbtree::cli::Commands::Walk {
                order: Some(rbtree::Order::PostOrder),
                ..
            })
        ));
    }
}
