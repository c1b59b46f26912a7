mod live;
mod summary;

pub use live::LiveStatusView;
pub use summary::SummaryView;
