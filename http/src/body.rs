//! Response body stream.

use std::fmt;
use std::io::{self, Cursor, Read};

use crate::error::{Error, Result};

/// An owned, readable response body.
pub struct Body {
    inner: Box<dyn Read + Send>,
}

impl Body {
    pub fn new<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            inner: Box::new(reader),
        }
    }

    pub fn empty() -> Self {
        Self::new(io::empty())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(Cursor::new(bytes.into()))
    }

    /// Reads the body to the end and replaces it with a fresh copy of the
    /// bytes read, which are also returned.
    ///
    /// On failure the bytes already read are put back in front of the
    /// unread remainder, so the body still yields everything the original
    /// stream had left.
    pub(crate) fn capture(&mut self, limit: Option<usize>) -> Result<Vec<u8>> {
        let mut inner = std::mem::replace(&mut self.inner, Box::new(io::empty()));
        let mut buf = Vec::new();

        let outcome = match limit {
            Some(limit) => {
                let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
                match (&mut inner).take(cap).read_to_end(&mut buf) {
                    Ok(_) if buf.len() > limit => Err(Error::BodyTooLarge { limit }),
                    Ok(_) => Ok(()),
                    Err(e) => Err(Error::Io(e)),
                }
            }
            None => inner.read_to_end(&mut buf).map(|_| ()).map_err(Error::Io),
        };

        match outcome {
            Ok(()) => {
                self.inner = Box::new(Cursor::new(buf.clone()));
                Ok(buf)
            }
            Err(e) => {
                self.inner = Box::new(Cursor::new(buf).chain(inner));
                Err(e)
            }
        }
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body").finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&'static [u8]> for Body {
    fn from(bytes: &'static [u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::from_bytes(text)
    }
}

impl From<&'static str> for Body {
    fn from(text: &'static str) -> Self {
        Self::new(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Yields `data`, then fails every read.
    struct Failing {
        data: Cursor<Vec<u8>>,
    }

    impl Read for Failing {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")),
                n => Ok(n),
            }
        }
    }

    fn read_all(body: &mut Body) -> Vec<u8> {
        let mut out = Vec::new();
        body.read_to_end(&mut out).unwrap();
        out
    }

    #[rstest]
    #[case(b"".to_vec(), None)]
    #[case(b"hello".to_vec(), None)]
    #[case(b"hello".to_vec(), Some(5))]
    #[case(vec![0xff; 4096], Some(8192))]
    fn test_capture_replays(#[case] data: Vec<u8>, #[case] limit: Option<usize>) {
        let mut body = Body::from(data.clone());
        let captured = body.capture(limit).unwrap();
        assert_eq!(captured, data);
        assert_eq!(read_all(&mut body), data);
    }

    #[test]
    fn test_capture_over_limit_restores_stream() {
        let mut body = Body::from("0123456789");
        let err = body.capture(Some(4)).unwrap_err();
        assert!(matches!(err, Error::BodyTooLarge { limit: 4 }));
        assert_eq!(read_all(&mut body), b"0123456789");
    }

    #[test]
    fn test_capture_io_error_keeps_read_prefix() {
        let mut body = Body::new(Failing {
            data: Cursor::new(b"partial".to_vec()),
        });
        let err = body.capture(None).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::ConnectionReset));

        let mut prefix = [0u8; 7];
        body.read_exact(&mut prefix).unwrap();
        assert_eq!(&prefix, b"partial");
    }
}
