//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements                  | Connects to               |
//! |------------|-----------------------------|---------------------------|
//! | `board`    | InputPort, AcquisitionPort, | DE10 peripheral registers |
//! |            | DisplayPort                 | (via any `RegisterBus`)   |
//! | `de10`     | RegisterBus                 | `/dev/mem` bridge mapping |
//! | `log_sink` | EventSink                   | process logger            |

pub mod board;
#[cfg(feature = "de10")]
pub mod de10;
pub mod log_sink;
