//! Certificate chains.
//!
//! A chain is ordered leaf first: index 0 is the end-entity certificate,
//! each following certificate issued the one before it, and the last one
//! may be a self-signed root.

use std::ops::Deref;

use crate::certificate::Certificate;

/// An ordered chain of X.509 certificates, end-entity first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateChain {
    certificates: Vec<Certificate>,
}

impl CertificateChain {
    pub fn new(certificates: Vec<Certificate>) -> Self {
        Self { certificates }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The end-entity (leaf) certificate, if present.
    pub fn end_entity(&self) -> Option<&Certificate> {
        self.certificates.first()
    }

    /// Every certificate after the end-entity.
    pub fn intermediates(&self) -> &[Certificate] {
        self.certificates.get(1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Certificate> {
        self.certificates.iter()
    }

    pub fn as_slice(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn into_vec(self) -> Vec<Certificate> {
        self.certificates
    }

    pub fn push(&mut self, cert: Certificate) {
        self.certificates.push(cert);
    }

    /// The last certificate, if it is a self-signed CA.
    ///
    /// TLS peers usually omit the root, so `None` is common for valid
    /// peer chains. Verified chains end in a trust anchor.
    pub fn root(&self) -> Option<&Certificate> {
        self.certificates
            .last()
            .filter(|cert| cert.is_self_signed() && cert.is_ca())
    }
}

impl From<Vec<Certificate>> for CertificateChain {
    fn from(certificates: Vec<Certificate>) -> Self {
        Self::new(certificates)
    }
}

impl From<Certificate> for CertificateChain {
    fn from(cert: Certificate) -> Self {
        Self::new(vec![cert])
    }
}

impl FromIterator<Certificate> for CertificateChain {
    fn from_iter<I: IntoIterator<Item = Certificate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Deref for CertificateChain {
    type Target = [Certificate];

    fn deref(&self) -> &Self::Target {
        &self.certificates
    }
}

impl<'a> IntoIterator for &'a CertificateChain {
    type Item = &'a Certificate;
    type IntoIter = std::slice::Iter<'a, Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.certificates.iter()
    }
}

impl IntoIterator for CertificateChain {
    type Item = Certificate;
    type IntoIter = std::vec::IntoIter<Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.certificates.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::Name;
    use rstest::rstest;

    fn cert(subject: &str, issuer: &str, ca: bool) -> Certificate {
        Certificate {
            raw_subject: subject.as_bytes().to_vec(),
            raw_issuer: issuer.as_bytes().to_vec(),
            subject: Name::with_common_name(subject),
            issuer: Name::with_common_name(issuer),
            basic_constraints_valid: ca,
            is_ca: ca,
            ..Default::default()
        }
    }

    fn three_chain() -> CertificateChain {
        CertificateChain::new(vec![
            cert("leaf", "intermediate", false),
            cert("intermediate", "root", true),
            cert("root", "root", true),
        ])
    }

    #[test]
    fn test_empty_chain() {
        let chain = CertificateChain::empty();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.end_entity().is_none());
        assert!(chain.intermediates().is_empty());
        assert!(chain.root().is_none());
    }

    #[test]
    fn test_chain_accessors() {
        let chain = three_chain();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.end_entity().unwrap().subject.common_name, "leaf");
        let intermediates: Vec<_> = chain
            .intermediates()
            .iter()
            .map(|c| c.subject.common_name.as_str())
            .collect();
        assert_eq!(intermediates, vec!["intermediate", "root"]);
        assert_eq!(chain.root().unwrap().subject.common_name, "root");
    }

    #[rstest]
    #[case(cert("leaf", "leaf", false))]
    #[case(cert("sub", "root", true))]
    fn test_root_requires_self_signed_ca(#[case] last: Certificate) {
        let mut chain = CertificateChain::from(cert("leaf", "sub", false));
        chain.push(last);
        assert!(chain.root().is_none());
    }

    #[test]
    fn test_collect_and_into_vec() {
        let chain: CertificateChain = three_chain().into_iter().rev().collect();
        assert_eq!(chain.end_entity().unwrap().subject.common_name, "root");
        let names: Vec<_> = (&chain).into_iter().map(|c| c.subject.common_name.clone()).collect();
        assert_eq!(names, vec!["root", "intermediate", "leaf"]);
        assert_eq!(chain.into_vec().len(), 3);
    }
}
