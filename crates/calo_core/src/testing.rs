use calo_common::layout::Field;

/// Places each value into its field. Values wider than the field are
/// truncated to the field's mask.
pub fn pack(fields: &[(Field, u64)]) -> u64 {
    fields
        .iter()
        .fold(0, |id, (field, value)| id | ((value & field.mask()) << field.shift))
}
