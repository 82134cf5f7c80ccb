// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// My ternary expression handler.  While it may seem redundant, it's
/// surprisingly useful when working with complex logic tables, such
/// as the border cases in the energy function and the clamped
/// neighbor ranges in the seam search.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
