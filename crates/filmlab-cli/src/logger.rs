//! Console logging setup.
//!
//! Logs go to stderr so they never interleave with the interactive menu
//! on stdout. The level defaults to warn and can be raised through the
//! `FILMLAB_LOG` environment variable.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

pub fn init() {
    let level = std::env::var("FILMLAB_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .expect("static logging configuration is valid");

    // Ignore re-initialization in tests
    let _ = log4rs::init_config(config);
}
