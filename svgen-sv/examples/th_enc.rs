//! Generate a registered thermometer encoder and write it to `th_enc.sv`.

use chrono::Local;
use eyre::Result;
use svgen_sv::{
    CaseItem, ClockSpec, HeaderInfo, Module, Port, SvFile, always_ff, case, inputs, literals, stmt,
};

/// Selection input width.
const IW: u32 = 4;
/// Thermometer output width.
const OW: u32 = 1 << IW;

fn main() -> Result<()> {
    let mut ios = inputs(["clk_i", "reset_n_i"])?;
    ios.push(Port::input_vec("sel_i", IW - 1, 0)?);
    ios.push(Port::output_vec("th_o", OW - 1, 0)?);

    let items = (0..OW)
        .map(|i| {
            let value = (1u128 << (i + 1)) - 1;
            Ok(CaseItem::new(
                literals::hex(i as u128, IW)?,
                stmt::nonblocking("th_o", &literals::bin(value, OW)?),
            ))
        })
        .collect::<svgen_sv::Result<Vec<_>>>()?;

    let mut sv = SvFile::new();
    sv.push(always_ff(
        &ClockSpec::default(),
        stmt::nonblocking("th_o", &literals::hex(0, OW)?),
        case("sel_i", &items),
    ));
    sv.wrap_module(&Module::new("th_enc").ports(ios));

    let date = Local::now().format("%Y-%m-%d").to_string();
    let info = HeaderInfo::new("th_enc", "svgen", "thermometer encoder", "th_enc.sv", date);
    let path = sv.write_sv(".", "th_enc", Some(&info))?;
    println!("wrote {}", path.display());
    Ok(())
}
