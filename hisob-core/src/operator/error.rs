use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorType {
    OperatorNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    pub error: ResolveErrorType,
    pub span: SrcSpan
}

impl ResolveError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            ResolveErrorType::OperatorNotFound => {
                ("Operator topilmadi", vec![String::from("Masalan: \"ikki qo'sh uch\"")])
            }
        }
    }
}
