//! Static UI vocabulary, one tree per language.

#[derive(Debug)]
pub(crate) enum Node {
    Text(&'static str),
    Group(&'static [(&'static str, Node)]),
}

const UK_TIME_OF_DAY: &[(&str, Node)] = &[
    ("day", Node::Text("День")),
    ("night", Node::Text("Ніч")),
];

const UK_WEATHER_CONDITIONS: &[(&str, Node)] = &[
    ("cloudy", Node::Text("Хмарно")),
    ("sunny", Node::Text("Сонячно")),
    ("rainy", Node::Text("Дощ")),
    ("partly_cloudy", Node::Text("Мінлива хмарність")),
    ("clear", Node::Text("Ясно")),
    ("snow", Node::Text("Сніг")),
    ("thunderstorm", Node::Text("Гроза")),
    ("mist", Node::Text("Туман")),
    ("drizzle", Node::Text("Мряка")),
    ("overcast", Node::Text("Похмуро")),
];

pub(crate) const UK: &[(&str, Node)] = &[
    ("main", Node::Text("Головна")),
    ("favorites", Node::Text("Обране")),
    ("loading", Node::Text("Завантаження...")),
    ("error", Node::Text("Помилка")),
    ("retry", Node::Text("Спробувати ще раз")),
    ("confirm", Node::Text("Підтвердити")),
    ("cancel", Node::Text("Скасувати")),
    ("ok", Node::Text("OK")),
    ("temperature", Node::Text("Температура")),
    ("humidity", Node::Text("Вологість")),
    ("wind", Node::Text("Вітер")),
    ("wind_speed_unit", Node::Text("м/с")),
    ("feels_like", Node::Text("Відчувається як")),
    ("pressure", Node::Text("Тиск")),
    ("pressure_unit", Node::Text("гПа")),
    ("clouds", Node::Text("Хмарність")),
    ("visibility", Node::Text("Видимість")),
    ("sunrise", Node::Text("Схід сонця")),
    ("sunset", Node::Text("Захід сонця")),
    ("time_of_day", Node::Group(UK_TIME_OF_DAY)),
    ("weather_conditions", Node::Group(UK_WEATHER_CONDITIONS)),
    ("search_city", Node::Text("Пошук міста...")),
    ("no_results", Node::Text("Міст не знайдено")),
    ("select_city", Node::Text("Оберіть місто")),
    ("week", Node::Text("Тиждень")),
    ("add_to_favorites", Node::Text("Додати до обраного")),
    ("remove_from_favorites", Node::Text("Видалити з обраного")),
    ("no_favorites", Node::Text("У вас поки немає обраних міст")),
    (
        "no_favorites_message",
        Node::Text("Додайте міста до обраного, щоб швидко перевіряти погоду в них"),
    ),
    ("favorites_limit", Node::Text("Ліміт обраного")),
    (
        "favorites_limit_message",
        Node::Text(
            "Ви можете додати максимум 5 міст до обраного. Видаліть якесь місто, щоб додати нове.",
        ),
    ),
    ("favorites_count", Node::Text("Обрано {current} з {max} міст")),
    ("confirm_removal", Node::Text("Підтвердження видалення")),
    ("remove_block_confirmation", Node::Text("Ви дійсно хочете видалити цей блок погоди?")),
    ("remove_block", Node::Text("Видалити блок")),
    ("location_error", Node::Text("Не вдалося визначити ваше місцезнаходження")),
    ("weather_error", Node::Text("Не вдалося отримати дані про погоду")),
    ("search_error", Node::Text("Помилка пошуку міст")),
    ("morning", Node::Text("Ранок")),
    ("day", Node::Text("Сьогодні")),
    ("evening", Node::Text("Вечір")),
    ("night", Node::Text("Ніч")),
    ("add_city", Node::Text("Додати місто")),
    ("refresh", Node::Text("Оновити")),
    ("settings", Node::Text("Налаштування")),
    ("about", Node::Text("Про додаток")),
    ("language_changed", Node::Text("Мову змінено на {language}")),
    ("configured", Node::Text("Налаштування збережено у {path}")),
];

const EN_TIME_OF_DAY: &[(&str, Node)] = &[
    ("day", Node::Text("Day")),
    ("night", Node::Text("Night")),
];

const EN_WEATHER_CONDITIONS: &[(&str, Node)] = &[
    ("cloudy", Node::Text("Cloudy")),
    ("sunny", Node::Text("Sunny")),
    ("rainy", Node::Text("Rain")),
    ("partly_cloudy", Node::Text("Partly Cloudy")),
    ("clear", Node::Text("Clear")),
    ("snow", Node::Text("Snow")),
    ("thunderstorm", Node::Text("Thunderstorm")),
    ("mist", Node::Text("Mist")),
    ("drizzle", Node::Text("Drizzle")),
    ("overcast", Node::Text("Overcast")),
];

pub(crate) const EN: &[(&str, Node)] = &[
    ("main", Node::Text("Main")),
    ("favorites", Node::Text("Favorites")),
    ("loading", Node::Text("Loading...")),
    ("error", Node::Text("Error")),
    ("retry", Node::Text("Retry")),
    ("confirm", Node::Text("Confirm")),
    ("cancel", Node::Text("Cancel")),
    ("ok", Node::Text("OK")),
    ("time_of_day", Node::Group(EN_TIME_OF_DAY)),
    ("temperature", Node::Text("Temperature")),
    ("humidity", Node::Text("Humidity")),
    ("wind", Node::Text("Wind")),
    ("wind_speed_unit", Node::Text("m/s")),
    ("feels_like", Node::Text("Feels like")),
    ("pressure", Node::Text("Pressure")),
    ("pressure_unit", Node::Text("hPa")),
    ("clouds", Node::Text("Clouds")),
    ("visibility", Node::Text("Visibility")),
    ("sunrise", Node::Text("Sunrise")),
    ("sunset", Node::Text("Sunset")),
    ("weather_conditions", Node::Group(EN_WEATHER_CONDITIONS)),
    ("search_city", Node::Text("Search city...")),
    ("no_results", Node::Text("No cities found")),
    ("select_city", Node::Text("Select a city")),
    ("week", Node::Text("Week")),
    ("add_to_favorites", Node::Text("Add to favorites")),
    ("remove_from_favorites", Node::Text("Remove from favorites")),
    ("no_favorites", Node::Text("You have no favorite cities yet")),
    ("no_favorites_message", Node::Text("Add cities to favorites to quickly check their weather")),
    ("favorites_limit", Node::Text("Favorites limit")),
    (
        "favorites_limit_message",
        Node::Text("You can add maximum 5 cities to favorites. Remove some city to add a new one."),
    ),
    ("favorites_count", Node::Text("{current} of {max} cities selected")),
    ("confirm_removal", Node::Text("Confirm removal")),
    ("remove_block_confirmation", Node::Text("Are you sure you want to remove this weather block?")),
    ("remove_block", Node::Text("Remove block")),
    ("location_error", Node::Text("Failed to determine your location")),
    ("weather_error", Node::Text("Failed to get weather data")),
    ("search_error", Node::Text("Error searching cities")),
    ("morning", Node::Text("Morning")),
    ("day", Node::Text("Today")),
    ("evening", Node::Text("Evening")),
    ("night", Node::Text("Night")),
    ("add_city", Node::Text("Add city")),
    ("refresh", Node::Text("Refresh")),
    ("settings", Node::Text("Settings")),
    ("about", Node::Text("About")),
    ("language_changed", Node::Text("Language switched to {language}")),
    ("configured", Node::Text("Configuration saved to {path}")),
];

/// Provider condition phrases: `(phrase, uk, en)`.
pub(crate) const CONDITIONS: &[(&str, &str, &str)] = &[
    ("broken clouds", "Хмарно", "Broken clouds"),
    ("scattered clouds", "Розсіяні хмари", "Scattered clouds"),
    ("clear sky", "Ясно", "Clear sky"),
    ("few clouds", "Невелика хмарність", "Few clouds"),
    ("light rain", "Невеликий дощ", "Light rain"),
    ("moderate rain", "Помірний дощ", "Moderate rain"),
    ("heavy rain", "Сильний дощ", "Heavy rain"),
    ("overcast clouds", "Похмуро", "Overcast clouds"),
    ("light snow", "Невеликий сніг", "Light snow"),
    ("moderate snow", "Помірний сніг", "Moderate snow"),
    ("heavy snow", "Сильний сніг", "Heavy snow"),
    ("mist", "Туман", "Mist"),
    ("thunderstorm", "Гроза", "Thunderstorm"),
    ("rain", "Дощ", "Rain"),
    ("snow", "Сніг", "Snow"),
    ("drizzle", "Мряка", "Drizzle"),
];
