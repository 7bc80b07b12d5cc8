//! Speech output through an external text-to-speech program.

use crate::config::SpeechConfig;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use vocab_core::{Pronouncer, Silent};

/// Words per minute at rate 1.0.
const BASE_WPM: f32 = 175.0;

/// Command-line conventions of the supported TTS programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// macOS `say`: selects a named voice.
    Say,
    /// `espeak` / `espeak-ng`: selects a language voice.
    Espeak,
}

impl Engine {
    pub fn detect(program: &str) -> Self {
        let name = Path::new(program)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(program);
        if name == "say" {
            Self::Say
        } else {
            Self::Espeak
        }
    }
}

/// Spawns one TTS process per utterance, killing the previous one first.
#[derive(Debug)]
pub struct CommandPronouncer {
    program: String,
    engine: Engine,
    voice: String,
    lang: String,
    rate: f32,
    child: Option<Child>,
    available: bool,
}

impl CommandPronouncer {
    pub fn new(program: impl Into<String>, config: &SpeechConfig) -> Self {
        let program = program.into();
        Self {
            engine: Engine::detect(&program),
            program,
            voice: config.voice.clone(),
            lang: config.lang.clone(),
            rate: config.rate,
            child: None,
            available: true,
        }
    }

    /// Arguments for speaking `text`.
    pub fn args(&self, text: &str) -> Vec<String> {
        let wpm = ((BASE_WPM * self.rate).round() as u32).to_string();
        match self.engine {
            Engine::Say => vec![
                "-v".to_string(),
                self.voice.clone(),
                "-r".to_string(),
                wpm,
                text.to_string(),
            ],
            Engine::Espeak => vec![
                "-v".to_string(),
                espeak_voice(&self.lang),
                "-s".to_string(),
                wpm,
                text.to_string(),
            ],
        }
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
            }
            let _ = child.wait();
        }
    }
}

impl Pronouncer for CommandPronouncer {
    fn is_ready(&self) -> bool {
        self.available
    }

    fn speak(&mut self, text: &str) {
        if !self.available || text.is_empty() {
            return;
        }
        self.cancel();

        let spawned = Command::new(&self.program)
            .args(self.args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => self.child = Some(child),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(program = %self.program, "speech program not found, disabling speech");
                self.available = false;
            }
            Err(e) => tracing::warn!(program = %self.program, error = %e, "failed to start speech"),
        }
    }
}

impl Drop for CommandPronouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// espeak voice for a BCP-47 style language tag.
fn espeak_voice(lang: &str) -> String {
    let lang = lang.to_lowercase();
    match lang.as_str() {
        "es" | "es-es" => "es".to_string(),
        l if l.starts_with("es-") => "es-419".to_string(),
        _ => lang,
    }
}

/// Build the pronouncer described by `config`.
pub fn from_config(config: &SpeechConfig) -> Box<dyn Pronouncer> {
    match &config.program {
        Some(program) => Box::new(CommandPronouncer::new(program.clone(), config)),
        None => Box::new(Silent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detect_engine() {
        assert_eq!(Engine::detect("say"), Engine::Say);
        assert_eq!(Engine::detect("/usr/bin/say"), Engine::Say);
        assert_eq!(Engine::detect("espeak-ng"), Engine::Espeak);
    }

    #[test]
    fn espeak_arguments() {
        let p = CommandPronouncer::new("espeak-ng", &SpeechConfig::default());
        assert_eq!(p.args("el baño"), vec!["-v", "es-419", "-s", "175", "el baño"]);
    }

    #[test]
    fn say_arguments() {
        let config = SpeechConfig {
            rate: 0.8,
            ..SpeechConfig::default()
        };
        let p = CommandPronouncer::new("say", &config);
        assert_eq!(p.args("Hola"), vec!["-v", "Paulina", "-r", "140", "Hola"]);
    }

    #[test]
    fn espeak_voice_mapping() {
        assert_eq!(espeak_voice("es-ES"), "es");
        assert_eq!(espeak_voice("es-MX"), "es-419");
        assert_eq!(espeak_voice("pt-BR"), "pt-br");
    }

    #[test]
    fn missing_program_disables_speech() {
        let mut p = CommandPronouncer::new(
            "definitely-not-a-tts-program-xyz",
            &SpeechConfig::default(),
        );
        assert!(p.is_ready());
        p.speak("Hola");
        assert!(!p.is_ready());
        p.speak("Hola");
    }

    #[test]
    fn disabled_speech_is_silent() {
        let config = SpeechConfig {
            program: None,
            ..SpeechConfig::default()
        };
        assert!(!from_config(&config).is_ready());
    }

    #[cfg(unix)]
    mod process {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;
        use std::thread;
        use std::time::Duration;

        /// A TTS stand-in that ignores its arguments and keeps running.
        fn slow_program(dir: &Path) -> PathBuf {
            let path = dir.join("slow-tts");
            fs::write(&path, "#!/bin/sh\nexec sleep 30\n").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn is_running(pid: u32) -> bool {
            Command::new("sh")
                .args(["-c", &format!("kill -0 {pid}")])
                .stderr(Stdio::null())
                .status()
                .map(|s| s.success())
                .unwrap_or(false)
        }

        /// Speak and return the spawned child's pid. Retries while another
        /// test thread still holds the freshly written script open.
        fn speak_and_spawn(p: &mut CommandPronouncer, text: &str) -> u32 {
            for _ in 0..20 {
                p.speak(text);
                if let Some(child) = &p.child {
                    return child.id();
                }
                thread::sleep(Duration::from_millis(25));
            }
            panic!("speech program never started");
        }

        #[test]
        fn new_utterance_kills_previous_one() {
            let dir = tempfile::tempdir().unwrap();
            let program = slow_program(dir.path());
            let mut p = CommandPronouncer::new(program.to_string_lossy(), &SpeechConfig::default());

            let first = speak_and_spawn(&mut p, "uno");
            assert!(is_running(first));

            let second = speak_and_spawn(&mut p, "dos");
            assert_ne!(first, second);
            assert!(!is_running(first));
            assert!(is_running(second));
            assert!(p.is_ready());
        }

        #[test]
        fn drop_kills_running_utterance() {
            let dir = tempfile::tempdir().unwrap();
            let program = slow_program(dir.path());
            let mut p = CommandPronouncer::new(program.to_string_lossy(), &SpeechConfig::default());

            let pid = speak_and_spawn(&mut p, "adiós");
            assert!(is_running(pid));

            drop(p);
            assert!(!is_running(pid));
        }
    }
}
