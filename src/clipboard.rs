//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by `copypasta`. The context is opened on first use so a
/// headless session only fails when a copy is actually requested.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| Error::ClipboardUnavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| Error::ClipboardUnavailable("no clipboard context".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_string())
            .map_err(|e| Error::ClipboardUnavailable(e.to_string()))?;
        // Some providers only take ownership of the selection once it is read back.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}
