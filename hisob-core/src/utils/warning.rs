use std::{path::PathBuf, rc::Rc, sync::{atomic::{AtomicUsize, Ordering}, Arc, RwLock}};

use termcolor::Buffer;

use super::diagnostic::{Diagnostic, Label, Level, Location};
use super::src_span::SrcSpan;

/// Skipped or guessed-around input the collaborator may want to surface.
/// None of these change the computed value.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PhraseWarning {
    UnknownWord {
        location: SrcSpan,
        word: String
    },
    MidpointSplit {
        location: SrcSpan
    }
}

impl PhraseWarning {
    pub fn location(&self) -> SrcSpan {
        match self {
            PhraseWarning::UnknownWord { location, .. }
            | PhraseWarning::MidpointSplit { location } => *location
        }
    }
}

pub trait WarningEmitterIO {
    fn emit_warning(&self, warning: Warning);
}

#[derive(Debug, Clone, Copy)]
pub struct NullWarningEmitterIO;

impl WarningEmitterIO for NullWarningEmitterIO {
    fn emit_warning(&self, _warning: Warning) {}
}

#[derive(Debug, Default, Clone)]
pub struct VectorWarningEmitterIO {
    pub warnings: Arc<RwLock<Vec<Warning>>>
}

impl VectorWarningEmitterIO {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Warning> {
        let mut warnings = self.write_lock();
        std::mem::take(&mut *warnings)
    }

    pub fn reset(&self) {
        let mut warnings = self.write_lock();
        warnings.clear();
    }

    pub fn pop(&self) -> Option<Warning> {
        let mut warnings = self.write_lock();
        warnings.pop()
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Warning>> {
        self.warnings.write().expect("Vector lock poisoned")
    }
}

impl WarningEmitterIO for VectorWarningEmitterIO {
    fn emit_warning(&self, warning: Warning) {
        let mut warnings = self.write_lock();

        warnings.push(warning);
    }
}

pub struct WarningEmitter {
    count: Arc<AtomicUsize>,
    emitter: Rc<dyn WarningEmitterIO>
}

impl WarningEmitter {
    pub fn new(emitter: Rc<dyn WarningEmitterIO>) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            emitter,
        }
    }

    pub fn null() -> Self {
        Self::new(Rc::new(NullWarningEmitterIO))
    }

    pub fn reset_count(&self) {
        self.count.store(0, Ordering::Relaxed);
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    pub fn emit(&self, warning: Warning) {
        _ = self.count.fetch_add(1, Ordering::Relaxed);
        self.emitter.emit_warning(warning);
    }
}

/// Warning emitter bound to the phrase being evaluated, so every
/// warning carries enough context to be rendered on its own.
pub struct PhraseWarningEmitter {
    phrase_path: PathBuf,
    phrase_src: String,
    emitter: WarningEmitter,
}

impl PhraseWarningEmitter {
    pub fn new(
        phrase_path: PathBuf,
        phrase_src: String,
        emitter: WarningEmitter
    ) -> Self {
        Self {
            phrase_path,
            phrase_src,
            emitter,
        }
    }

    pub fn null() -> Self {
        Self {
            phrase_path: PathBuf::new(),
            phrase_src: String::from(""),
            emitter: WarningEmitter::new(Rc::new(NullWarningEmitterIO)),
        }
    }

    pub fn emit(&self, warning: PhraseWarning) {
        self.emitter.emit(Warning::Phrase {
            path: self.phrase_path.clone(),
            src: self.phrase_src.clone(),
            warning,
        });
    }
}

#[derive(Debug, Clone)]
pub enum Warning {
    Phrase {
        path: PathBuf,
        src: String,
        warning: PhraseWarning
    }
}

impl Warning {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Warning printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        self.to_diagnostic().write(buf);
        buf.write_all(b"\n")
            .expect("warning pretty buffer write space after");
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Warning::Phrase {
                path,
                src,
                warning
            } => match warning {
                PhraseWarning::UnknownWord { location, word } => {
                    Diagnostic {
                        title: "Unknown word".into(),
                        text: format!("`{word}` songa qo'shilmadi"),
                        level: Level::Warning,
                        location: Some(Location {
                            src: &src,
                            path: path.to_path_buf(),
                            label: Label {
                                text: None,
                                span: *location,
                            },
                        }),
                    }
                },
                PhraseWarning::MidpointSplit { location } => {
                    Diagnostic {
                        title: "Operator word not isolated".into(),
                        text: "Ibora o'rtasidan bo'lindi".into(),
                        level: Level::Warning,
                        location: Some(Location {
                            src: &src,
                            path: path.to_path_buf(),
                            label: Label {
                                text: None,
                                span: *location,
                            },
                        }),
                    }
                }
            }
        }
    }
}
