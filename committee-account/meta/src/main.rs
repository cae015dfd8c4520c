fn main() {
    multiversx_sc_meta_lib::cli_main::<committee_account::AbiProvider>();
}
