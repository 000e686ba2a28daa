#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Syntax {
    Att,
    Intel,
}

impl Syntax {
    pub fn to_str(self) -> &'static str {
        self.into()
    }

    /// Value for objdump's `-M`, AT&T is what objdump does on its own.
    pub fn objdump_option(self) -> Option<&'static str> {
        match self {
            Syntax::Att => None,
            Syntax::Intel => Some(self.to_str()),
        }
    }
}

impl Into<&'static str> for Syntax {
    fn into(self) -> &'static str {
        match self {
            Syntax::Att => "att",
            Syntax::Intel => "intel",
        }
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax::Att
    }
}
