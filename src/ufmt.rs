use crate::{
    len_type::LenType,
    vec::{VecInner, VecStorage},
    CapacityError,
};
use ufmt_write::uWrite;

impl<LenT: LenType, S: VecStorage<u8> + ?Sized> uWrite for VecInner<u8, LenT, S> {
    type Error = CapacityError;
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.extend_from_slice(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use crate::Vec;

    use ufmt::{derive::uDebug, uwrite};

    #[derive(uDebug)]
    struct Pair {
        x: u32,
        y: u32,
    }

    #[test]
    fn test_vec() {
        let a = 123;
        let b = Pair { x: 0, y: 1234 };

        let mut v = Vec::<u8, 32>::new();
        uwrite!(v, "{} -> {:?}", a, b).unwrap();

        assert_eq!(v, b"123 -> Pair { x: 0, y: 1234 }");
    }

    #[test]
    fn test_vec_err() {
        let p = Pair { x: 0, y: 1234 };
        let mut v = Vec::<u8, 4>::new();
        assert!(uwrite!(v, "{:?}", p).is_err());
    }
}
