use std::path::PathBuf;
use std::time::Duration;

use engine_logging::engine_info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Saving { path: PathBuf },
    Saved { path: PathBuf, bytes: u64 },
    ParseStarted,
    ParseFinished { elapsed: Duration },
}

/// Receives pipeline progress. Injected into the engine instead of having
/// each stage talk to a global logger.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

/// Forwards progress to the `engine_*` log macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: EngineEvent) {
        match event {
            EngineEvent::Saving { path } => engine_info!("Save html into {}", path.display()),
            EngineEvent::Saved { path, bytes } => {
                engine_info!("Saved {bytes} bytes into {}", path.display())
            }
            EngineEvent::ParseStarted => engine_info!("Parsing html..."),
            EngineEvent::ParseFinished { elapsed } => {
                engine_info!("Html parse finished ({} ms).", elapsed.as_millis())
            }
        }
    }
}
