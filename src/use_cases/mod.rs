pub mod nickname;
pub mod poller;
pub mod queue_panel;

#[cfg(test)]
pub(crate) mod test_support;
