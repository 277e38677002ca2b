//! User-facing copy (Vietnamese).

pub const LOGIN_MISSING_FIELDS: &str = "Vui lòng nhập Email và Mật khẩu";
pub const LOGIN_IN_PROGRESS: &str = "Đang đăng nhập, vui lòng chờ";
pub const LOGGED_OUT: &str = "Đã đăng xuất";
pub const PROFILE_SAVED: &str = "Đã cập nhật thông tin thành công!";
pub const PROFILE_REQUIRES_LOGIN: &str = "Vui lòng đăng nhập để cập nhật hồ sơ";

pub const CART_ITEM_REMOVED: &str = "Đã xóa món khỏi giỏ hàng";
pub const CART_EMPTY: &str = "Giỏ hàng đang trống";
pub const ORDER_IN_PROGRESS: &str = "Đơn hàng đang được xử lý";
pub const NO_ORDER_YET: &str = "Chưa có đơn hàng nào";

pub const PROMPT_MISSING: &str = "Vui lòng nhập nội dung để AI gợi ý!";
pub const SUGGESTION_IN_PROGRESS: &str = "AI đang suy nghĩ, vui lòng chờ";
pub const ASSISTANT_NOT_CONFIGURED: &str = "Xin lỗi, trợ lý AI chưa được cấu hình.";
pub const ASSISTANT_NO_SUGGESTION: &str = "Không tìm thấy gợi ý.";
pub const ASSISTANT_FAILED: &str = "Đã có lỗi xảy ra khi kết nối với AI.";
pub const CANNED_SUGGESTION: &str =
    "Dựa trên yêu cầu của bạn, tôi gợi ý bạn thử **Phở Thìn Lò Đúc** cho bữa nay!";

pub const ADVANCED_FILTER_UNAVAILABLE: &str = "Tính năng lọc nâng cao đang được cập nhật";
pub const TABLE_BOOKING_SENT: &str = "Đã gửi yêu cầu đặt chỗ đến nhà hàng";

pub const ADD_MENU_ITEM_UNAVAILABLE: &str = "Tính năng thêm món đang phát triển";
pub const MENU_ITEM_DELETED: &str = "Đã xóa món ăn khỏi menu";
pub const BOOKING_CONFIRMED: &str = "Đã nhận bàn thành công";
pub const BOOKING_REJECTED: &str = "Đã từ chối đặt bàn";
pub const MERCHANT_NOT_OPEN: &str = "Bảng quản lý cửa hàng chưa được mở";

pub const MAP_PLACEHOLDER: &str = "Bản đồ đang được tải...";

pub fn welcome(name: &str) -> String {
    format!("Chào mừng {} quay trở lại!", name)
}

pub fn order_code(code: &str) -> String {
    format!("Mã đơn: {}", code)
}

pub fn added_to_cart(item_name: &str) -> String {
    format!("Đã thêm {} vào giỏ", item_name)
}

pub fn social_login_unavailable(provider: &str) -> String {
    format!("Đăng nhập bằng {} đang được bảo trì", provider)
}

pub fn favorite_toggled(restaurant_name: &str, favorite: bool) -> String {
    if favorite {
        format!("Đã thêm {} vào yêu thích", restaurant_name)
    } else {
        format!("Đã bỏ {} khỏi yêu thích", restaurant_name)
    }
}

pub fn menu_item_not_found(id: &str) -> String {
    format!("Không tìm thấy món ăn: {}", id)
}

pub fn restaurant_not_found(id: &str) -> String {
    format!("Không tìm thấy nhà hàng: {}", id)
}

pub fn booking_not_found(id: u32) -> String {
    format!("Không tìm thấy đặt bàn #{}", id)
}
