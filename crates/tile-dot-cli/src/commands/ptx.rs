use tile_dot::kernels::dot::dot_ptx;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", dot_ptx());
    Ok(())
}
