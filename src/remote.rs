use log::{info, warn};
use suppaftp::types::FileType;
use suppaftp::FtpStream;

use crate::config::TransferConfig;
use crate::error::TransferError;

/// The file-transfer session one daily run acts against.  The listing
/// carries names only; this protocol gives no type metadata, so callers
/// decide eligibility on the name alone.
pub trait RemoteSource {
    /// Names of the entries in the remote working directory.
    fn list(&mut self) -> Result<Vec<String>, TransferError>;
    /// Retrieve one entry, binary mode.
    fn retrieve(&mut self, name: &str) -> Result<Vec<u8>, TransferError>;
    /// End the session.
    fn close(&mut self) -> Result<(), TransferError>;
}

/// An open FTP session.  Created once per daily run, closed at the end of
/// it, never shared across threads.
pub struct FtpSession {
    stream: FtpStream,
}

/// Open a session with the configured credentials and log the outcome.
pub fn connect(config: &TransferConfig) -> Result<FtpSession, TransferError> {
    info!("Connection attempted at {}", config.host);
    let mut stream = FtpStream::connect((config.host.as_str(), 21))?;
    let welcome = stream.get_welcome_msg().unwrap_or("").to_string();
    check_greeting(&welcome, config.strict_greeting)?;
    stream.login(&config.username, &config.password)?;
    stream.transfer_type(FileType::Binary)?;
    Ok(FtpSession { stream })
}

/// A welcome line starting with "220" signals a healthy server.  Anything
/// else is logged as a warning and, only under strict validation, aborts
/// the run.
fn check_greeting(welcome: &str, strict: bool) -> Result<(), TransferError> {
    if welcome.starts_with("220") {
        info!("Connection successful. {}", welcome);
        return Ok(());
    }
    let code = welcome.get(..3).unwrap_or(welcome);
    warn!("Connection received {} response.", code);
    if strict {
        return Err(TransferError::Greeting(welcome.to_string()));
    }
    Ok(())
}

impl RemoteSource for FtpSession {
    fn list(&mut self) -> Result<Vec<String>, TransferError> {
        Ok(self.stream.nlst(None)?)
    }

    fn retrieve(&mut self, name: &str) -> Result<Vec<u8>, TransferError> {
        let buf = self
            .stream
            .retr_as_buffer(name)
            .map_err(|e| TransferError::Transfer {
                name: name.to_string(),
                source: e,
            })?;
        Ok(buf.into_inner())
    }

    fn close(&mut self) -> Result<(), TransferError> {
        Ok(self.stream.quit()?)
    }
}

/// In-memory stand-in for an FTP session, for tests that exercise the
/// fetch and relocate flow without a network.
#[cfg(test)]
pub(crate) mod mock {
    use std::collections::BTreeMap;

    use super::RemoteSource;
    use crate::error::TransferError;

    pub struct InMemoryRemote {
        pub entries: BTreeMap<String, Vec<u8>>,
    }

    impl InMemoryRemote {
        pub fn new(entries: &[(&str, &[u8])]) -> InMemoryRemote {
            InMemoryRemote {
                entries: entries
                    .iter()
                    .map(|(name, bytes)| (name.to_string(), bytes.to_vec()))
                    .collect(),
            }
        }
    }

    impl RemoteSource for InMemoryRemote {
        fn list(&mut self) -> Result<Vec<String>, TransferError> {
            Ok(self.entries.keys().cloned().collect())
        }

        fn retrieve(&mut self, name: &str) -> Result<Vec<u8>, TransferError> {
            Ok(self.entries.get(name).cloned().unwrap_or_default())
        }

        fn close(&mut self) -> Result<(), TransferError> {
            Ok(())
        }
    }
}
