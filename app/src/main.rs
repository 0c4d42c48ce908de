mod input;

use std::error::Error;

use clap::Parser;
use crossbeam::channel::Receiver;
use log::{LevelFilter, error, info};
use rustyline::{Editor, error::ReadlineError};
use rusty_hub::{
    EventHub, FailurePolicy, GameMessageHandler, HubConfig, HubError, ON_GAME_STRING,
    ON_GAME_TEXT, ON_OVERLAY_STRING, ON_OVERLAY_TEXT, Text,
    logging::{ChannelLogger, LogMessage},
};

use input::Command;

/// Plays the host side of the message hub: every line typed is delivered as a
/// received message and the subscribed listeners print what they observe.
#[derive(Parser, Debug)]
#[command(name = "rusty-relay", version)]
struct Args {
    /// Keep invoking listeners after one fails instead of aborting the publish.
    #[arg(long)]
    isolate: bool,

    /// Most verbose hub log level to print (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn subscribe_printers(hub: &EventHub) -> Result<(), HubError> {
    hub.subscribe(ON_GAME_TEXT, |text: &Text| {
        println!("[chat:text]    {}", text.legacy_string())
    })?;
    hub.subscribe(ON_GAME_STRING, |line: &String| println!("[chat]         {line}"))?;
    hub.subscribe(ON_OVERLAY_TEXT, |text: &Text| {
        println!("[overlay:text] {}", text.legacy_string())
    })?;
    hub.subscribe(ON_OVERLAY_STRING, |line: &String| {
        println!("[overlay]      {line}")
    })?;
    Ok(())
}

fn print_listeners(hub: &EventHub) -> Result<(), HubError> {
    for (name, count) in [
        (ON_GAME_TEXT.name(), hub.listener_count(ON_GAME_TEXT)?),
        (ON_GAME_STRING.name(), hub.listener_count(ON_GAME_STRING)?),
        (ON_OVERLAY_TEXT.name(), hub.listener_count(ON_OVERLAY_TEXT)?),
        (ON_OVERLAY_STRING.name(), hub.listener_count(ON_OVERLAY_STRING)?),
    ] {
        println!("{name:<18} {count}");
    }
    Ok(())
}

fn drain_logs(log_recv: &Receiver<LogMessage>) {
    for record in log_recv.try_iter() {
        println!("{:<5} {}: {}", record.level, record.target, record.message);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let (logger, log_recv) = ChannelLogger::with_receiver(args.log_level);
    logger.install()?;

    let config = HubConfig {
        failure_policy: if args.isolate {
            FailurePolicy::Isolate
        } else {
            FailurePolicy::FailFast
        },
    };
    let hub = EventHub::message_hub(config);
    subscribe_printers(&hub)?;
    info!("relay ready ({})", hub.failure_policy());
    drain_logs(&log_recv);

    let mut editor = Editor::<()>::new();
    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                error!("unable to read input: {err}");
                break;
            }
        };
        editor.add_history_entry(line.as_str());

        let delivered = match input::parse(&line) {
            Command::Game(text) => hub.on_game_message(&text, false),
            Command::Overlay(text) => hub.on_game_message(&text, true),
            Command::Listeners => print_listeners(&hub),
            Command::Quit => break,
            Command::Empty => Ok(()),
        };
        if let Err(err) = delivered {
            error!("{err}");
        }
        drain_logs(&log_recv);
    }

    drain_logs(&log_recv);
    Ok(())
}
