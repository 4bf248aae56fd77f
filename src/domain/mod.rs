mod contract;
mod errors;
mod ports;

pub use contract::{
    GameMode, InOutRequest, ModeSelection, NicknameReceipt, NicknameRequest, QueueCounts,
    QueueDetails, SelectStatus, UserQueueStatus,
};
pub use errors::LadderError;
pub use ports::{LadderGateway, NavigationTarget, Navigator};
