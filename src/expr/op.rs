/// Operators of the visibleif expression language.
///
/// `UnaryMinus`/`UnaryPlus` never come out of the tokenizer; the builder
/// reclassifies `Minus`/`Plus` tokens based on position. `GetComp1..4` are
/// the postfix component accessors spelled `.x`/`.y`/`.z`/`.w`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OperatorType {
    /// Logical `||`.
    Or,
    /// Logical `&&`.
    And,
    /// `==`.
    CompEq,
    /// `!=`.
    CompNeq,
    /// `>`.
    CompGt,
    /// `>=`.
    CompGe,
    /// `<`.
    CompLt,
    /// `<=`.
    CompLe,
    /// Binary `+`.
    Plus,
    /// Binary `-`.
    Minus,
    /// `*`.
    Mul,
    /// `/`.
    Div,
    /// Prefix `-`.
    UnaryMinus,
    /// Prefix `+`.
    UnaryPlus,
    /// Prefix `!`.
    Not,
    /// Postfix `.x`.
    GetComp1,
    /// Postfix `.y`.
    GetComp2,
    /// Postfix `.z`.
    GetComp3,
    /// Postfix `.w`.
    GetComp4,
}

impl OperatorType {
    /// Number of operands this operator consumes.
    pub fn arity(self) -> usize {
        match self {
            Self::UnaryMinus
            | Self::UnaryPlus
            | Self::Not
            | Self::GetComp1
            | Self::GetComp2
            | Self::GetComp3
            | Self::GetComp4 => 1,
            _ => 2,
        }
    }

    /// Binding strength; a larger value binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::CompEq | Self::CompNeq => 3,
            Self::CompGt | Self::CompGe | Self::CompLt | Self::CompLe => 4,
            Self::Plus | Self::Minus => 5,
            Self::Mul | Self::Div => 6,
            Self::UnaryMinus | Self::UnaryPlus | Self::Not => 7,
            Self::GetComp1 | Self::GetComp2 | Self::GetComp3 | Self::GetComp4 => 8,
        }
    }

    /// Right-associative operators pop strictly-greater precedence only.
    pub fn is_right_associative(self) -> bool {
        matches!(self, Self::UnaryMinus | Self::UnaryPlus | Self::Not)
    }

    /// True for the postfix component accessors, which always apply to the
    /// operand already on the output stack.
    pub fn is_postfix(self) -> bool {
        matches!(
            self,
            Self::GetComp1 | Self::GetComp2 | Self::GetComp3 | Self::GetComp4
        )
    }

    /// Source spelling used in error messages.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::CompEq => "==",
            Self::CompNeq => "!=",
            Self::CompGt => ">",
            Self::CompGe => ">=",
            Self::CompLt => "<",
            Self::CompLe => "<=",
            Self::Plus | Self::UnaryPlus => "+",
            Self::Minus | Self::UnaryMinus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Not => "!",
            Self::GetComp1 => ".x",
            Self::GetComp2 => ".y",
            Self::GetComp3 => ".z",
            Self::GetComp4 => ".w",
        }
    }
}
