//! Generate a flip-flop module and write it to `dff.sv`.

use chrono::Local;
use eyre::Result;
use svgen_sv::{ClockSpec, HeaderInfo, Module, Port, SvFile, always_ff, inputs, literals, stmt};

fn main() -> Result<()> {
    let mut ios = inputs(["clk_i", "reset_n_i", "di"])?;
    ios.push(Port::output("do")?);

    let mut sv = SvFile::new();
    sv.push(always_ff(
        &ClockSpec::default(),
        stmt::nonblocking("do", &literals::bin(0, 1)?),
        stmt::nonblocking("do", "di"),
    ));
    sv.wrap_module(&Module::new("dff").ports(ios));

    let date = Local::now().format("%Y-%m-%d").to_string();
    let info = HeaderInfo::new("dff", "svgen", "Flip Flop implementation", "dff.sv", date);
    let path = sv.write_sv(".", "dff", Some(&info))?;
    println!("wrote {}", path.display());
    Ok(())
}
