//! Canonical constant names used by numerals.
//!
//! The registry maps each [`NumeralName`] to its interned [`Name`]. There is
//! one process-wide instance, interned into [`global_interner`] the first time
//! [`numeral_names`] is called and read-only from then on. Callers working
//! against a private interner can build their own with [`NumeralNames::new`].

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::{global_interner, Name, StringInterner};

/// Identifiers of the numeral constructors and the instances they take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumeralName {
    /// `zero : Π α [has_zero α], α`
    Zero,
    /// `one : Π α [has_one α], α`
    One,
    /// `bit0 : Π α [has_add α], α → α`
    Bit0,
    /// `bit1 : Π α [has_one α] [has_add α], α → α`
    Bit1,
    /// `neg : Π α [has_neg α], α → α`
    Neg,
    NatZero,
    NatSucc,
    // Legacy binary naturals.
    PosOne,
    PosBit0,
    PosBit1,
    NumZero,
    NumPos,
    // Instance projections that unfold to numeral leaves.
    HasZeroZero,
    HasOneOne,
    // Type and instances used when encoding `nat` numerals.
    Nat,
    NatHasZero,
    NatHasOne,
    NatHasAdd,
}

impl NumeralName {
    /// Number of registry entries.
    pub const COUNT: usize = 18;

    /// Every entry, in declaration order.
    pub const ALL: [NumeralName; Self::COUNT] = [
        Self::Zero,
        Self::One,
        Self::Bit0,
        Self::Bit1,
        Self::Neg,
        Self::NatZero,
        Self::NatSucc,
        Self::PosOne,
        Self::PosBit0,
        Self::PosBit1,
        Self::NumZero,
        Self::NumPos,
        Self::HasZeroZero,
        Self::HasOneOne,
        Self::Nat,
        Self::NatHasZero,
        Self::NatHasOne,
        Self::NatHasAdd,
    ];

    /// Fully qualified constant name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Bit0 => "bit0",
            Self::Bit1 => "bit1",
            Self::Neg => "neg",
            Self::NatZero => "nat.zero",
            Self::NatSucc => "nat.succ",
            Self::PosOne => "pos_num.one",
            Self::PosBit0 => "pos_num.bit0",
            Self::PosBit1 => "pos_num.bit1",
            Self::NumZero => "num.zero",
            Self::NumPos => "num.pos",
            Self::HasZeroZero => "has_zero.zero",
            Self::HasOneOne => "has_one.one",
            Self::Nat => "nat",
            Self::NatHasZero => "nat.has_zero",
            Self::NatHasOne => "nat.has_one",
            Self::NatHasAdd => "nat.has_add",
        }
    }

    /// Number of arguments the constant takes when it appears as a numeral
    /// node, counting type and instance arguments. Zero for bare constants.
    pub const fn arity(self) -> usize {
        match self {
            Self::Zero | Self::One => 2,
            Self::Bit0 | Self::Neg => 3,
            Self::Bit1 => 4,
            Self::NatSucc | Self::PosBit0 | Self::PosBit1 | Self::NumPos => 1,
            Self::NatZero
            | Self::PosOne
            | Self::NumZero
            | Self::HasZeroZero
            | Self::HasOneOne
            | Self::Nat
            | Self::NatHasZero
            | Self::NatHasOne
            | Self::NatHasAdd => 0,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Interned names for every [`NumeralName`].
pub struct NumeralNames {
    names: [Name; NumeralName::COUNT],
    by_name: FxHashMap<Name, NumeralName>,
}

impl NumeralNames {
    /// Intern every entry into `interner`.
    pub fn new(interner: &StringInterner) -> Self {
        let names = NumeralName::ALL.map(|n| interner.intern(n.as_str()));
        let by_name = NumeralName::ALL
            .iter()
            .map(|&n| (names[n.index()], n))
            .collect();
        NumeralNames { names, by_name }
    }

    /// Interned name of `n`.
    #[inline]
    pub fn get(&self, n: NumeralName) -> Name {
        self.names[n.index()]
    }

    /// Reverse lookup; `None` for names outside the registry.
    pub fn lookup(&self, name: Name) -> Option<NumeralName> {
        self.by_name.get(&name).copied()
    }
}

static NUMERAL_NAMES: OnceLock<NumeralNames> = OnceLock::new();

/// The process-wide registry, interned into the global interner on first use.
pub fn numeral_names() -> &'static NumeralNames {
    NUMERAL_NAMES.get_or_init(|| {
        let names = NumeralNames::new(global_interner());
        tracing::debug!(entries = NumeralName::COUNT, "numeral name registry initialized");
        names
    })
}

#[cfg(test)]
mod tests;
