use shared::constants::CLICK_LISTENER;

macro_rules! idents {
    ($const: ident = $ty: ident { $($var: ident => $val: expr),*$(,)? }) => {
        pub struct $ty {
            $(pub $var: &'static str),*
        }

        pub static $const: $ty = $ty {
            $($var: $val),*
        };
    };
}

idents!(CODEGEN_IDENTS = CodegenIdents {
    on_create => "onCreate",
    saved_state => "savedInstanceState",
    set_content_view => "setContentView",
    find_view_by_id => "findViewById",
    set_on_click_listener => "setOnClickListener",
    click_listener => CLICK_LISTENER,
    on_click => "onClick",
    view_var => "view",
});
