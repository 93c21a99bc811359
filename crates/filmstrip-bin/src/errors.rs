use std::fmt::{Debug, Formatter};

use filmstrip_bundle::BundleErrors;
use filmstrip_core::{SequenceDecodeErrors, SequenceEncodeErrors};

pub enum CliErrors
{
    Io(std::io::Error),
    Bundle(BundleErrors),
    Encode(SequenceEncodeErrors),
    Decode(SequenceDecodeErrors),
    Generic(String)
}

impl Debug for CliErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::Io(ref error) =>
            {
                writeln!(f, "I/O failed: {error}")
            }
            Self::Bundle(ref error) =>
            {
                writeln!(f, "Bundle handling failed: {error:?}")
            }
            Self::Encode(ref error) =>
            {
                writeln!(f, "Encoding failed: {error:?}")
            }
            Self::Decode(ref error) =>
            {
                writeln!(f, "Decoding failed: {error:?}")
            }
            Self::Generic(ref message) =>
            {
                writeln!(f, "{message}")
            }
        }
    }
}

impl From<std::io::Error> for CliErrors
{
    fn from(from: std::io::Error) -> Self
    {
        CliErrors::Io(from)
    }
}

impl From<BundleErrors> for CliErrors
{
    fn from(from: BundleErrors) -> Self
    {
        CliErrors::Bundle(from)
    }
}

impl From<SequenceEncodeErrors> for CliErrors
{
    fn from(from: SequenceEncodeErrors) -> Self
    {
        CliErrors::Encode(from)
    }
}

impl From<SequenceDecodeErrors> for CliErrors
{
    fn from(from: SequenceDecodeErrors) -> Self
    {
        CliErrors::Decode(from)
    }
}

impl From<String> for CliErrors
{
    fn from(from: String) -> Self
    {
        CliErrors::Generic(from)
    }
}
