extern crate xspline;

use xspline::{batch_basis, BasisIndex, Extrapolation};

fn main() {

    let knots = [0.0, 1.0, 2.0, 3.0];
    let degree = 2;

    let x_min = -1.0;
    let x_max = 4.0;
    let number_of_steps = 50;
    let step = (x_max - x_min) / number_of_steps as f64;

    let x_vector: Vec<f64> = (0..=number_of_steps)
        .map(|i| x_min + step * i as f64)
        .collect();

    let clipped = batch_basis(&x_vector, &knots, degree, BasisIndex::Last, Extrapolation::NONE);
    let extended = batch_basis(&x_vector, &knots, degree, BasisIndex::Last, Extrapolation::RIGHT);

    println!("x;clipped;extended");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.4};{:.4}", x_vector[i], clipped[i], extended[i]);
    }
}
