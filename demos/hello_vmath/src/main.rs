use argh::FromArgs;
use vmath::{Mat2F32, Vec2F32, Vec3F32};

#[derive(FromArgs)]
/// Print a few vector and matrix computations.
struct Args {
    /// x component of the input vector
    #[argh(option, short = 'x', default = "3.0")]
    x: f32,

    /// y component of the input vector
    #[argh(option, short = 'y', default = "4.0")]
    y: f32,

    /// matrix entries in row-major order, e.g. `-m 1,2,3,4`
    #[argh(option, short = 'm', default = "String::from(\"1,2,3,4\")")]
    matrix: String,
}

fn parse_matrix(s: &str) -> Result<Mat2F32, Box<dyn std::error::Error>> {
    let entries = s
        .split(',')
        .map(|e| e.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()?;
    let entries: [f32; 4] = entries
        .try_into()
        .map_err(|e: Vec<f32>| format!("expected 4 matrix entries, got {}", e.len()))?;
    Ok(Mat2F32::from_rows_array(&entries))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let v = Vec2F32::new(args.x, args.y);
    let m = parse_matrix(&args.matrix)?;
    log::info!("input vector {v}, input matrix {m}");

    println!("v = {v}, |v| = {}", v.length());
    match v.normalized() {
        Ok(n) => println!("normalized v = {n}"),
        Err(e) => println!("normalized v: {e}"),
    }
    match v.angle_to(Vec2F32::new(1.0, 0.0)) {
        Ok(angle) => println!("angle to x axis = {angle} deg"),
        Err(e) => println!("angle to x axis: {e}"),
    }

    println!("m = {m}, det(m) = {}", m.determinant());
    println!("m * v = {}", m * v);
    println!("transpose(m) = {}", m.transpose());
    match m.inverse() {
        Ok(inv) => println!("inverse(m) = {inv}, m * inverse(m) = {}", m * inv),
        Err(e) => println!("inverse(m): {e}"),
    }

    let x = Vec3F32::new(1.0, 0.0, 0.0);
    let y = Vec3F32::new(0.0, 1.0, 0.0);
    println!("{x} x {y} = {}", x.cross_product(y));

    Ok(())
}
