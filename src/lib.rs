//! Two small tools: a column plot viewer for whitespace-delimited numeric
//! files (`plotnotify`) and a Slack notifier (`slack-notify`).

pub mod app;
pub mod color;
pub mod data;
pub mod notify;
pub mod state;
pub mod ui;
