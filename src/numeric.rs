/*

    Declare numeric types used throughout this repo.

    WARNING: If you like to use f32 instead of f64
    while scanning, you need to change both of these:
    pub type Float = f32;
    pub type Vector3 = Vec3;

    @date: 2 Oct, 2025
    @author: Bartu
*/

use bevy_math::DVec3;
pub type Float = f64; // WARNING: If you want to change it to f32, don't forget to update Vector3
pub type Vector3 = DVec3;

/// Components of a vector as a plain array, in x y z order.
/// Used when printing or serializing bounds.
pub fn to_array(v: &Vector3) -> [Float; 3] {
    [v.x, v.y, v.z]
}
