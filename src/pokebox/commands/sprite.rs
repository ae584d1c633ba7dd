use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sprites::SpriteCatalog;

pub fn run<I: AsRef<str>>(sprites: &mut SpriteCatalog, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        match sprites.lookup(id)? {
            Some(sprite) => {
                result.add_message(CmdMessage::info(format!(
                    "{}: {} bytes",
                    id,
                    sprite.bytes.len()
                )));
                result.sprite_paths.push(sprite.path.clone());
            }
            None => result.add_message(CmdMessage::info(format!(
                "No sprite for {} (looked for {})",
                id,
                sprites.path_for(id).display()
            ))),
        }
    }

    Ok(result)
}
