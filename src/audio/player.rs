use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

type Clip = Buffered<Decoder<BufReader<File>>>;

/// A discrete sound cue, fired once with no acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The snake ate the apple.
    Eat,
    /// A round-ending collision, whatever the cause.
    Crash,
}

/// Fire-and-forget audio player. Every asset is optional: a missing file, an
/// undecodable file, or an unavailable output device all degrade to silence
/// rather than an error.
pub struct AudioPlayer {
    backend: Option<Backend>,
}

struct Backend {
    // Dropping the stream kills playback, so it rides along with the handle.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    eat: Option<Clip>,
    crash: Option<Clip>,
    music: Option<Sink>,
}

impl AudioPlayer {
    /// Open the default output device and load whichever assets exist under
    /// `resource_dir`: `ding.mp3`, `crash.mp3`, and the looping
    /// `bg_music_1.mp3`.
    pub fn new(resource_dir: &Path) -> Self {
        let (stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(_) => return Self::disabled(),
        };

        let eat = load_clip(&resource_dir.join("ding.mp3"));
        let crash = load_clip(&resource_dir.join("crash.mp3"));
        let music = start_music(&handle, &resource_dir.join("bg_music_1.mp3"));

        Self {
            backend: Some(Backend {
                _stream: stream,
                handle,
                eat,
                crash,
                music,
            }),
        }
    }

    /// A player that stays silent forever.
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// Fire a cue. Playback is detached; overlapping cues mix.
    pub fn play(&self, cue: Cue) {
        let Some(backend) = &self.backend else {
            return;
        };

        let clip = match cue {
            Cue::Eat => &backend.eat,
            Cue::Crash => &backend.crash,
        };

        if let Some(clip) = clip {
            let _ = backend.handle.play_raw(clip.clone().convert_samples());
        }
    }

    /// Pause the looping background track, if one is playing.
    pub fn pause_music(&self) {
        if let Some(Backend {
            music: Some(music), ..
        }) = &self.backend
        {
            music.pause();
        }
    }

    /// Resume the looping background track, if one was loaded.
    pub fn resume_music(&self) {
        if let Some(Backend {
            music: Some(music), ..
        }) = &self.backend
        {
            music.play();
        }
    }
}

fn load_clip(path: &Path) -> Option<Clip> {
    let file = File::open(path).ok()?;
    let decoder = Decoder::new(BufReader::new(file)).ok()?;
    Some(decoder.buffered())
}

fn start_music(handle: &OutputStreamHandle, path: &Path) -> Option<Sink> {
    let file = File::open(path).ok()?;
    let source = Decoder::new(BufReader::new(file)).ok()?.repeat_infinite();
    let sink = Sink::try_new(handle).ok()?;
    sink.append(source);
    Some(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_disabled_player_is_silent_and_safe() {
        let player = AudioPlayer::disabled();
        player.play(Cue::Eat);
        player.play(Cue::Crash);
        player.pause_music();
        player.resume_music();
    }

    #[test]
    fn test_missing_assets_degrade_to_silence() {
        // No output device in CI still yields a usable (silent) player, and
        // a nonexistent resource directory never errors.
        let player = AudioPlayer::new(&PathBuf::from("definitely/not/a/dir"));
        player.play(Cue::Eat);
        player.play(Cue::Crash);
        player.pause_music();
    }
}
