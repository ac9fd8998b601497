//! Reflection table and wrong-side guard.
//!
//! Each facing has two reflection planes, evaluated in fixed order. A plane
//! turns incoming motion by exactly 90 degrees and pins one coordinate axis
//! to the mirror's center, so a deflected bolt leaves properly aligned:
//!
//! ```text
//! facing Right:  Left  -> Up    (snap x)   Down -> Right (snap y)
//! facing Down:   Left  -> Down  (snap x)   Up   -> Right (snap y)
//! facing Left:   Up    -> Left  (snap y)   Right -> Down (snap x)
//! facing Up:     Right -> Up    (snap x)   Down -> Left  (snap y)
//! ```
//!
//! A mirror never reverses motion and never passes it straight through.

use crate::plugins::projectiles::components::Dir4;

use super::components::Facing;

/// Coordinate axis a redirected bolt is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One reflection plane: bolts flying along `fly` leave along `deflect`,
/// snapped onto the mirror's `snap` axis.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub fly: Dir4,
    pub deflect: Dir4,
    pub snap: Axis,
}

const fn rule(fly: Dir4, deflect: Dir4, snap: Axis) -> Rule {
    Rule { fly, deflect, snap }
}

/// The two reflection planes for a facing, in evaluation order.
pub const fn rules(facing: Facing) -> [Rule; 2] {
    use Dir4::*;
    match facing {
        Facing::Right => [rule(Left, Up, Axis::X), rule(Down, Right, Axis::Y)],
        Facing::Down => [rule(Left, Down, Axis::X), rule(Up, Right, Axis::Y)],
        Facing::Left => [rule(Up, Left, Axis::Y), rule(Right, Down, Axis::X)],
        Facing::Up => [rule(Right, Up, Axis::X), rule(Down, Left, Axis::Y)],
    }
}

/// Outcome of holding one bolt's travel state against one facing's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Neither plane applies; the bolt flies on untouched.
    Pass,
    /// Turn by 90 degrees and pin one coordinate to the mirror's center.
    Redirect { dir: Dir4, snap: Axis },
    /// Wrong-side hit: the bolt travels along a deflect direction it never
    /// earned by flying in through the matching plane. It hit the back of
    /// the mirror and is consumed.
    Absorb,
}

/// Evaluate both planes in fixed order against a local copy of the travel
/// state.
///
/// At most one plane can redirect per call: a redirect rewrites `dir`, and no
/// facing's second plane accepts the first plane's output. The guard runs
/// after each plane whether or not it fired, so it also catches redirections
/// left over from earlier ticks. A bolt with no redirection history
/// (`prev == None`) moving along a deflect direction is a back hit too.
pub fn judge(facing: Facing, mut dir: Dir4, mut prev: Option<Dir4>) -> Verdict {
    let mut verdict = Verdict::Pass;

    for rule in rules(facing) {
        if dir == rule.fly {
            prev = Some(dir);
            dir = rule.deflect;
            verdict = Verdict::Redirect {
                dir,
                snap: rule.snap,
            };
        }
        if dir == rule.deflect && prev != Some(rule.fly) {
            return Verdict::Absorb;
        }
    }

    verdict
}
