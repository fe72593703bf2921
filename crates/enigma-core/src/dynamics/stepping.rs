// crates/enigma-core/src/dynamics/stepping.rs
//
// Odometer stepping with the double-step anomaly.
//
// Bank order is left to right; the last stepping rotor is the fast one.
// Every decision reads pre-cycle positions only:
//   - the fast rotor always turns
//   - a rotor turns when its right neighbour sits on a notch (carry)
//   - a rotor sitting on its own notch also turns when a pawl rests on it,
//     i.e. when a stepping rotor exists to its left (double step)
//   - stationary rotors never turn and drive nothing
//
// One left-to-right pass is enough: deciding rotor i reads rotors i-1 (flag only),
// i and i+1, and neither i nor i+1 has moved yet when i is decided.

use crate::wiring::rotor::Rotor;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Rotors that turned this cycle.
    pub moved: usize,
    /// A rotor turned because its own notch was engaged by the pawl on its left.
    pub double_step: bool,
}

pub fn step_bank(bank: &mut [Rotor]) -> StepReport {
    let mut report = StepReport::default();
    let n = bank.len();

    for i in 0..n {
        if bank[i].is_stationary() {
            continue;
        }

        let turns = if i + 1 == n {
            true
        } else {
            let right = &bank[i + 1];
            let carried = !right.is_stationary() && right.is_at_notch();
            let pawl_on_left = i > 0 && !bank[i - 1].is_stationary();
            let self_carry = pawl_on_left && bank[i].is_at_notch();
            report.double_step |= self_carry;
            carried || self_carry
        };

        if turns {
            // Notches were read above; the returned flag is redundant here.
            bank[i].advance();
            report.moved += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::alphabet::Alphabet;
    use crate::wiring::rotor::{NotchSet, Wiring};

    const BETA: &str = "LEYJVCNIXWPBQMDRTAKZGFUHOS";

    // Historical I / II / III tables; notches Q, E, V.
    fn bank(window: &str) -> Vec<Rotor> {
        let a = Alphabet::latin();
        let tables = [
            ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
            ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
            ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
        ];
        tables
            .iter()
            .zip(window.chars())
            .map(|(&(name, wiring, notch), w)| {
                Rotor::new(
                    name,
                    Arc::new(Wiring::parse(&a, name, wiring).unwrap()),
                    NotchSet::parse(&a, name, notch).unwrap(),
                    0,
                    a.index_of(w).unwrap(),
                )
            })
            .collect()
    }

    fn window(bank: &[Rotor]) -> String {
        let a = Alphabet::latin();
        bank.iter().map(|r| a.symbol_at(r.position())).collect()
    }

    #[test]
    fn fast_rotor_alone_turns_off_notch() {
        let mut b = bank("AAA");
        let rep = step_bank(&mut b);
        assert_eq!(window(&b), "AAB");
        assert_eq!(rep.moved, 1);
        assert!(!rep.double_step);
    }

    #[test]
    fn right_notch_carries_into_middle_only() {
        let mut b = bank("AAV");
        let rep = step_bank(&mut b);
        assert_eq!(window(&b), "ABW");
        assert_eq!(rep.moved, 2);
    }

    #[test]
    fn middle_on_its_notch_turns_all_three() {
        let mut b = bank("AEB");
        let rep = step_bank(&mut b);
        assert_eq!(window(&b), "BFC");
        assert_eq!(rep.moved, 3);
        assert!(rep.double_step);
    }

    #[test]
    fn double_step_sequence() {
        let mut b = bank("ADU");
        let mut seen = vec![];
        for _ in 0..3 {
            step_bank(&mut b);
            seen.push(window(&b));
        }
        assert_eq!(seen, ["ADV", "AEW", "BFX"]);
    }

    #[test]
    fn left_rotor_on_its_notch_does_not_self_carry() {
        let mut b = bank("QAA");
        step_bank(&mut b);
        assert_eq!(window(&b), "QAB");
    }

    #[test]
    fn single_rotor_bank_always_turns() {
        let mut b = bank("V");
        let rep = step_bank(&mut b);
        assert_eq!(window(&b), "W");
        assert_eq!(rep.moved, 1);
    }

    #[test]
    fn stationary_left_wheel_never_turns_nor_pawls() {
        let a = Alphabet::latin();
        let beta = Rotor::new(
            "Beta",
            Arc::new(Wiring::parse(&a, "Beta", BETA).unwrap()),
            NotchSet::default(),
            0,
            0,
        )
        .with_stationary(true);

        let mut b = vec![beta];
        b.extend(bank("QEV"));
        step_bank(&mut b);
        // Rotor I on its notch with only a stationary wheel to its left: no self carry.
        // Middle II on E self-carries and drives I.
        assert_eq!(window(&b), "ARFW");
    }
}
