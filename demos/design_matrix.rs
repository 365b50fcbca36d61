extern crate xspline;

use xspline::{Evaluation, Extrapolation, LinearTails, Spline};

fn main() {

    let spline = Spline::new(vec![0.0, 1.0, 2.5, 3.0, 5.0], 3, LinearTails::NONE).unwrap();

    let x_min = 0.0;
    let x_max = 5.0;
    let number_of_steps = 20;
    let step = (x_max - x_min) / number_of_steps as f64;

    let x_vector: Vec<f64> = (0..=number_of_steps)
        .map(|i| x_min + step * i as f64)
        .collect();

    let matrix = spline.design_matrix(&x_vector, Evaluation::Value, Extrapolation::NONE);

    print!("x");
    for idx in 0..spline.num_spline_bases() {
        print!(";b{}", idx);
    }
    println!();
    for (x, row) in x_vector.iter().zip(matrix.row_iter()) {
        print!("{:.2}", x);
        for value in row.iter() {
            print!(";{:.4}", value);
        }
        println!();
    }
}
