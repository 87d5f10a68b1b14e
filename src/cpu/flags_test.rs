use super::*;

#[test]
fn reserved_bits_hold_after_every_setter() {
    let mut f = Flags::new();
    assert_eq!(f.to_byte() & 0x2A, 0x02);

    f.set_carry(true);
    f.set_zero(true);
    f.set_sign(true);
    f.set_parity(true);
    f.set_auxiliary_carry(true);
    assert_eq!(f.to_byte() & 0x2A, 0x02);
    assert_eq!(f.to_byte(), 0xD7);
}

#[test]
fn reserved_bits_hold_for_every_byte_value() {
    for b in 0..=255u16 {
        let f = Flags::from_byte(b as u8);
        assert_eq!(f.to_byte() & 0x02, 0x02);
        assert_eq!(f.to_byte() & 0x28, 0);
    }
}

#[test]
fn xra_a_clears_everything_but_zero_and_parity() {
    let mut f = Flags::new();
    f.set_carry(true);
    f.set_auxiliary_carry(true);
    f.set_carry(false);
    f.set_auxiliary_carry(false);
    f.set_zsp(0);
    assert!(f.zero());
    assert!(!f.sign());
    assert!(f.parity());
    assert!(!f.carry());
    assert!(!f.auxiliary_carry());
}

#[test]
fn load_byte_does_not_renormalize() {
    let mut f = Flags::new();
    f.load_byte(0xFF);
    assert_eq!(f.to_byte(), 0xFF);
}
