//! Creating data in wire format.

use octseq::builder::{OctetsBuilder, Truncate};

//------------ Composer ------------------------------------------------------

/// A type that wire-format data can be appended to.
///
/// Every [`OctetsBuilder`] can receive wire data. A composer additionally
/// allows looking at what has been written so far and to cut it back to an
/// earlier length, which is what is needed to roll back a partially
/// written record.
pub trait Composer: OctetsBuilder + AsRef<[u8]> + Truncate {}

#[cfg(feature = "std")]
impl Composer for std::vec::Vec<u8> {}

impl<const N: usize> Composer for octseq::array::Array<N> {}

#[cfg(feature = "bytes")]
impl Composer for bytes::BytesMut {}

//------------ Compose -------------------------------------------------------

/// A type that knows how to append its wire format to an octets builder.
///
/// This is implemented for the fixed-width integer types. All multi-octet
/// values are written in network byte order.
pub trait Compose {
    /// The length in octets of the composed value.
    const COMPOSE_LEN: u16 = 0;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl<'a, T: Compose + ?Sized> Compose for &'a T {
    const COMPOSE_LEN: u16 = T::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose(target)
    }
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(u16);
compose_to_be_bytes!(u32);

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::array::Array;

    #[test]
    fn compose_len() {
        assert_eq!(u8::COMPOSE_LEN, 1);
        assert_eq!(u16::COMPOSE_LEN, 2);
        assert_eq!(u32::COMPOSE_LEN, 4);
    }

    #[test]
    fn network_byte_order() {
        let mut buf = Array::<8>::new();
        0x12u8.compose(&mut buf).unwrap();
        0x3456u16.compose(&mut buf).unwrap();
        0x789a_bcdeu32.compose(&mut buf).unwrap();
        let data: &[u8] = buf.as_ref();
        assert_eq!(data, &[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde]);
    }
}
