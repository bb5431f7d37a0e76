/* 

This is intended to quickly import commonly used modules across
the obj-bounds crate.

@date: 8 Nov, 2025
@author: bartu
*/

// Almost every module logs, so I'm adding tracing here
pub use tracing::{info, error, warn, debug};
pub use smart_default::SmartDefault;

pub use crate::numeric::{*};
