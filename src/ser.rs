use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::{
    len_type::LenType,
    vec::{VecInner, VecStorage},
};

impl<T, LenT, S> Serialize for VecInner<T, LenT, S>
where
    T: Serialize,
    LenT: LenType,
    S: VecStorage<T> + ?Sized,
{
    fn serialize<SER>(&self, serializer: SER) -> Result<SER::Ok, SER::Error>
    where
        SER: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}
