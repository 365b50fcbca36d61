extern crate xspline;

use xspline::{BasisIndex, Extrapolation, LinearTails, Spline};

fn main() {

    let knots = vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0];
    let spline = Spline::new(knots, 2, LinearTails::BOTH).unwrap();

    let x_min = -1.0;
    let x_max = 4.0;
    let number_of_steps = 50;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;value;slope;area");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!(
            "{:.2};{:.4};{:.4};{:.4}",
            x,
            spline.basis(x, BasisIndex::Nth(0), Extrapolation::NONE),
            spline.derivative(x, 1, BasisIndex::Nth(0), Extrapolation::NONE),
            spline.integral(x_min, x, 1, BasisIndex::Nth(0), Extrapolation::NONE)
        );
    }
}
