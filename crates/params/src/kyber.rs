//! Constants for Kyber-family key encapsulation parameter sets

/// Kyber polynomial degree
pub const KYBER_N: usize = 256;

/// Kyber modulus
pub const KYBER_Q: u32 = 3329;

/// Ring degree of the reduced-size "alkaline" experiments
pub const ALKALINE_N: usize = 4;

/// Literal description of a named scheme instantiation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KyberSpec {
    /// Name used to select the set
    pub name: &'static str,

    /// Heading printed above the report
    pub title: &'static str,

    /// Polynomial degree
    pub n: usize,

    /// Number of polynomials (module rank)
    pub m: usize,

    /// Centered binomial parameter of the secret key
    pub secret_noise_width: u32,

    /// Centered binomial parameter of the key-generation error
    pub error_noise_width: u32,

    /// Centered binomial parameter of e1 and e2, when it differs from the
    /// key-generation error
    pub ciphertext_noise_width: Option<u32>,

    /// Modulus
    pub q: u32,

    /// Alphabet size of a compressed public key coefficient
    pub rqk: u32,

    /// Alphabet size of a compressed first ciphertext coefficient
    pub rqc: u32,

    /// Alphabet size of a compressed second ciphertext coefficient
    pub rq2: u32,
}

/// Kyber-512 with eta1 = 3 and eta2 = 2
pub const LIGHT: KyberSpec = KyberSpec {
    name: "light",
    title: "Kyber512 (light)",
    n: KYBER_N,
    m: 2,
    secret_noise_width: 3,
    error_noise_width: 3,
    ciphertext_noise_width: Some(2),
    q: KYBER_Q,
    rqk: 1 << 12,
    rqc: 1 << 10,
    rq2: 1 << 4,
};

/// Kyber-512 with eta = 2 everywhere
pub const KYBER512_ETA2: KyberSpec = KyberSpec {
    name: "kyber512-eta2",
    title: "Kyber512 eta2 (light)",
    n: KYBER_N,
    m: 2,
    secret_noise_width: 2,
    error_noise_width: 2,
    ciphertext_noise_width: None,
    q: KYBER_Q,
    rqk: 1 << 12,
    rqc: 1 << 10,
    rq2: 1 << 4,
};

/// Kyber-768
pub const RECOMMENDED: KyberSpec = KyberSpec {
    name: "recommended",
    title: "Kyber768 (recommended)",
    n: KYBER_N,
    m: 3,
    secret_noise_width: 2,
    error_noise_width: 2,
    ciphertext_noise_width: None,
    q: KYBER_Q,
    rqk: 1 << 12,
    rqc: 1 << 10,
    rq2: 1 << 4,
};

/// Kyber-1024
pub const PARANOID: KyberSpec = KyberSpec {
    name: "paranoid",
    title: "Kyber1024 (paranoid)",
    n: KYBER_N,
    m: 4,
    secret_noise_width: 2,
    error_noise_width: 2,
    ciphertext_noise_width: None,
    q: KYBER_Q,
    rqk: 1 << 12,
    rqc: 1 << 11,
    rq2: 1 << 5,
};

/// Toy ring, q = 41, no compression
pub const ALKALINE41: KyberSpec = KyberSpec {
    name: "alkaline41",
    title: "Alkaline D",
    n: ALKALINE_N,
    m: 2,
    secret_noise_width: 2,
    error_noise_width: 2,
    ciphertext_noise_width: None,
    q: 41,
    rqk: 41,
    rqc: 41,
    rq2: 41,
};

/// Toy ring, q = 41, five-bit compression
pub const ALKALINE41_COMP32: KyberSpec = KyberSpec {
    name: "alkaline41-comp32",
    title: "Alkaline41comp32",
    n: ALKALINE_N,
    m: 2,
    secret_noise_width: 2,
    error_noise_width: 2,
    ciphertext_noise_width: None,
    q: 41,
    rqk: 32,
    rqc: 32,
    rq2: 32,
};

/// Toy ring, q = 29, eta = 2 (about 28% failure rate)
pub const ALKALINE29_ETA2: KyberSpec = KyberSpec {
    name: "alkaline29-eta2",
    title: "Alkaline29eta2",
    n: ALKALINE_N,
    m: 2,
    secret_noise_width: 2,
    error_noise_width: 2,
    ciphertext_noise_width: None,
    q: 29,
    rqk: 29,
    rqc: 29,
    rq2: 29,
};

/// Toy ring, q = 29, eta = 2 with narrower ciphertext noise; the ciphertext
/// MLWE is weaker than the public key one
pub const ALKALINE29_ETA2_STAR: KyberSpec = KyberSpec {
    name: "alkaline29-eta2-star",
    title: "Alkaline29eta2star",
    n: ALKALINE_N,
    m: 2,
    secret_noise_width: 2,
    error_noise_width: 2,
    ciphertext_noise_width: Some(1),
    q: 29,
    rqk: 29,
    rqc: 29,
    rq2: 29,
};

/// Toy ring, q = 29, eta = 1
pub const ALKALINE29_ETA1: KyberSpec = KyberSpec {
    name: "alkaline29-eta1",
    title: "Alkaline C",
    n: ALKALINE_N,
    m: 2,
    secret_noise_width: 1,
    error_noise_width: 1,
    ciphertext_noise_width: None,
    q: 29,
    rqk: 29,
    rqc: 29,
    rq2: 29,
};

/// Toy ring, q = 23 (non-standard modulus), eta = 1
pub const ALKALINE23_ETA1: KyberSpec = KyberSpec {
    name: "alkaline23-eta1",
    title: "Alkaline AAA",
    n: ALKALINE_N,
    m: 2,
    secret_noise_width: 1,
    error_noise_width: 1,
    ciphertext_noise_width: None,
    q: 23,
    rqk: 23,
    rqc: 23,
    rq2: 23,
};

/// Toy ring, q = 17, eta = 1
pub const ALKALINE17_ETA1: KyberSpec = KyberSpec {
    name: "alkaline17-eta1",
    title: "Alkaline AAAA",
    n: ALKALINE_N,
    m: 2,
    secret_noise_width: 1,
    error_noise_width: 1,
    ciphertext_noise_width: None,
    q: 17,
    rqk: 17,
    rqc: 17,
    rq2: 17,
};

/// Toy ring, q = 17, four-bit compression
pub const ALKALINE17_COMP16: KyberSpec = KyberSpec {
    name: "alkaline17-comp16",
    title: "Alkaline17comp16",
    n: ALKALINE_N,
    m: 2,
    secret_noise_width: 1,
    error_noise_width: 1,
    ciphertext_noise_width: None,
    q: 17,
    rqk: 16,
    rqc: 16,
    rq2: 16,
};

/// Every named set, in report order
pub const ALL: &[KyberSpec] = &[
    LIGHT,
    KYBER512_ETA2,
    RECOMMENDED,
    PARANOID,
    ALKALINE41,
    ALKALINE41_COMP32,
    ALKALINE29_ETA2,
    ALKALINE29_ETA2_STAR,
    ALKALINE29_ETA1,
    ALKALINE23_ETA1,
    ALKALINE17_ETA1,
    ALKALINE17_COMP16,
];

/// Sets reported when the caller does not choose any
pub const DEFAULT_REPORT: &[KyberSpec] = &[
    ALKALINE41,
    ALKALINE29_ETA1,
    ALKALINE29_ETA2_STAR,
    ALKALINE23_ETA1,
    ALKALINE17_ETA1,
];

/// Look up a named set, ignoring ASCII case
pub fn by_name(name: &str) -> Option<&'static KyberSpec> {
    ALL.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(by_name("recommended"), Some(&RECOMMENDED));
        assert_eq!(by_name("Paranoid").map(|s| s.m), Some(4));
        assert!(by_name("kyber2048").is_none());
    }

    #[test]
    fn test_default_report_is_subset() {
        for spec in DEFAULT_REPORT {
            assert_eq!(by_name(spec.name), Some(spec));
        }
    }
}
