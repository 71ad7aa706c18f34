use codespan_reporting::term::termcolor::{Ansi, NoColor, WriteColor};

pub type Writer = Ansi<Vec<u8>>;
pub type PlainWriter = NoColor<Vec<u8>>;

pub trait WriterTrait: WriteColor {
    fn empty() -> Self;

    fn to_string(&self) -> String;
}

impl WriterTrait for Writer {
    fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn to_string(&self) -> String {
        String::from_utf8_lossy(self.get_ref()).into_owned()
    }
}

impl WriterTrait for PlainWriter {
    fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn to_string(&self) -> String {
        String::from_utf8_lossy(self.get_ref()).into_owned()
    }
}
