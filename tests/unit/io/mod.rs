mod cli;
mod logging;
mod progress;
