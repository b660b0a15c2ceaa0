//! Built-in UI strings. Every key in `EN` must also appear in `TA`.

use super::table::Entries;

pub(crate) const EN: Entries = &[
    // Nav / common
    ("app.name", "Holy Family Shrine"),
    ("app.tagline", "A house of prayer for all peoples"),
    ("nav.home", "Home"),
    ("nav.prayers", "Prayer requests"),
    ("nav.testimonies", "Testimonies"),
    ("nav.announcements", "Announcements"),
    ("nav.gallery", "Gallery"),
    ("nav.livestream", "Live Mass"),
    ("nav.contact", "Contact"),
    ("nav.admin", "Admin"),
    ("lang.label", "Language"),
    ("footer.copyright", "© Holy Family Shrine"),
    ("common.loading", "Loading…"),
    ("common.error_try_again", "Something went wrong. Please try again."),
    ("common.submit", "Submit"),
    ("common.submitting", "Sending…"),
    ("common.delete", "Delete"),
    ("common.confirm_delete", "Click again to delete"),
    ("common.back", "Back to home"),
    ("common.not_found", "Page not found"),
    ("common.name", "Your name"),
    ("common.email", "Email"),
    ("common.optional", "(optional)"),
    ("common.required_fields", "Please fill in all required fields."),
    ("toast.details", "Details:"),
    ("toast.submit_failed", "Could not send"),
    ("toast.load_failed", "Could not load"),
    ("toast.saved", "Saved"),
    ("toast.dismiss", "Dismiss"),
    // Home
    ("home.welcome", "Welcome to the shrine"),
    (
        "home.subtitle",
        "Share your prayer intentions, read testimonies of grace, and join us for Mass online or in person.",
    ),
    ("home.cta.prayer", "Send a prayer request"),
    ("home.cta.livestream", "Watch live"),
    ("home.latest_announcements", "Latest announcements"),
    ("home.mass_times_title", "Mass times"),
    (
        "home.mass_times_body",
        "Weekdays 6:00 am and 6:00 pm · Sundays 6:00 am, 8:30 am and 5:30 pm",
    ),
    // Prayer requests
    ("prayers.title", "Prayer requests"),
    ("prayers.intro", "Our community prays for every intention shared here."),
    ("prayers.form.request", "Your prayer intention"),
    ("prayers.form.request_ph", "Write your intention…"),
    ("prayers.form.private", "Keep private (only the prayer team sees it)"),
    ("prayers.submitted", "Thank you. We will pray for your intention."),
    ("prayers.wall_title", "Prayer wall"),
    ("prayers.none_yet", "No prayer requests yet."),
    ("prayers.prayed", "Prayed for"),
    ("prayers.mark_prayed", "Mark as prayed"),
    ("prayers.private_badge", "Private"),
    // Testimonies
    ("testimonies.title", "Testimonies"),
    ("testimonies.intro", "Share how God has worked in your life."),
    ("testimonies.form.title", "Title"),
    ("testimonies.form.title_ph", "A short title"),
    ("testimonies.form.body", "Your testimony"),
    ("testimonies.form.body_ph", "Tell your story…"),
    ("testimonies.submitted", "Thank you. Your testimony will appear after review."),
    ("testimonies.none_yet", "No testimonies yet."),
    ("testimonies.pending", "Pending"),
    ("testimonies.approved", "Approved"),
    ("testimonies.rejected", "Rejected"),
    ("testimonies.approve", "Approve"),
    ("testimonies.reject", "Reject"),
    // Announcements
    ("announcements.title", "Announcements"),
    ("announcements.none_yet", "No announcements right now."),
    ("announcements.event_date", "Date:"),
    ("announcements.form.title", "Title"),
    ("announcements.form.body", "Details"),
    ("announcements.form.event_date", "Event date (YYYY-MM-DD)"),
    ("announcements.create", "Publish"),
    // Gallery
    ("gallery.title", "Gallery"),
    ("gallery.none_yet", "No photos yet."),
    ("gallery.form.caption", "Caption"),
    ("gallery.form.file", "Photo"),
    ("gallery.upload", "Upload"),
    ("gallery.uploaded", "Photo uploaded"),
    ("gallery.no_file", "Choose a photo first."),
    ("gallery.too_large", "Photos must be at most 10 MB."),
    // Livestream
    ("livestream.title", "Live Mass"),
    ("livestream.live_now", "Live now"),
    ("livestream.offline", "We are not live right now. Please check the Mass times."),
    ("livestream.form.title", "Stream title"),
    ("livestream.form.url", "Embed URL"),
    ("livestream.form.is_live", "Currently live"),
    ("livestream.save", "Save"),
    // Contact
    ("contact.title", "Contact us"),
    ("contact.intro", "Write to the shrine office. We reply within two days."),
    ("contact.form.subject", "Subject"),
    ("contact.form.message", "Message"),
    ("contact.sent", "Your message has been sent."),
    ("contact.address_title", "Shrine office"),
    ("contact.office_hours", "Office hours: Monday to Saturday, 9:00 am to 5:00 pm"),
    // Admin
    ("admin.title", "Administration"),
    ("admin.signin", "Sign in"),
    ("admin.username", "Username"),
    ("admin.password", "Password"),
    ("admin.signout", "Sign out"),
    ("admin.signed_in_as", "Signed in as"),
    ("admin.signin_failed", "Sign-in failed"),
    ("admin.messages", "Messages"),
    ("admin.no_messages", "No messages."),
];

pub(crate) const TA: Entries = &[
    // Nav / common
    ("app.name", "திருக்குடும்ப திருத்தலம்"),
    ("app.tagline", "எல்லா மக்களுக்குமான ஜெப வீடு"),
    ("nav.home", "முகப்பு"),
    ("nav.prayers", "ஜெப விண்ணப்பங்கள்"),
    ("nav.testimonies", "சாட்சியங்கள்"),
    ("nav.announcements", "அறிவிப்புகள்"),
    ("nav.gallery", "படத்தொகுப்பு"),
    ("nav.livestream", "நேரலை திருப்பலி"),
    ("nav.contact", "தொடர்புக்கு"),
    ("nav.admin", "நிர்வாகம்"),
    ("lang.label", "மொழி"),
    ("footer.copyright", "© திருக்குடும்ப திருத்தலம்"),
    ("common.loading", "ஏற்றுகிறது…"),
    ("common.error_try_again", "ஏதோ தவறு நடந்தது. மீண்டும் முயற்சிக்கவும்."),
    ("common.submit", "சமர்ப்பி"),
    ("common.submitting", "அனுப்புகிறது…"),
    ("common.delete", "நீக்கு"),
    ("common.confirm_delete", "நீக்க மீண்டும் அழுத்தவும்"),
    ("common.back", "முகப்புக்குத் திரும்பு"),
    ("common.not_found", "பக்கம் கிடைக்கவில்லை"),
    ("common.name", "உங்கள் பெயர்"),
    ("common.email", "மின்னஞ்சல்"),
    ("common.optional", "(விருப்பத்தேர்வு)"),
    ("common.required_fields", "தேவையான அனைத்து புலங்களையும் நிரப்பவும்."),
    ("toast.details", "விவரங்கள்:"),
    ("toast.submit_failed", "அனுப்ப முடியவில்லை"),
    ("toast.load_failed", "ஏற்ற முடியவில்லை"),
    ("toast.saved", "சேமிக்கப்பட்டது"),
    ("toast.dismiss", "மூடு"),
    // Home
    ("home.welcome", "திருத்தலத்திற்கு வரவேற்கிறோம்"),
    (
        "home.subtitle",
        "உங்கள் ஜெபக் கருத்துகளைப் பகிருங்கள், அருளின் சாட்சியங்களை வாசியுங்கள், நேரிலோ இணையத்திலோ திருப்பலியில் எங்களுடன் இணையுங்கள்.",
    ),
    ("home.cta.prayer", "ஜெப விண்ணப்பம் அனுப்புங்கள்"),
    ("home.cta.livestream", "நேரலையில் காணுங்கள்"),
    ("home.latest_announcements", "சமீபத்திய அறிவிப்புகள்"),
    ("home.mass_times_title", "திருப்பலி நேரங்கள்"),
    (
        "home.mass_times_body",
        "வார நாட்கள் காலை 6:00, மாலை 6:00 · ஞாயிறு காலை 6:00, 8:30, மாலை 5:30",
    ),
    // Prayer requests
    ("prayers.title", "ஜெப விண்ணப்பங்கள்"),
    ("prayers.intro", "இங்கு பகிரப்படும் ஒவ்வொரு கருத்துக்காகவும் எங்கள் சமூகம் ஜெபிக்கிறது."),
    ("prayers.form.request", "உங்கள் ஜெபக் கருத்து"),
    ("prayers.form.request_ph", "உங்கள் கருத்தை எழுதுங்கள்…"),
    ("prayers.form.private", "தனிப்பட்டதாக வை (ஜெபக் குழுவினர் மட்டும் காண்பர்)"),
    ("prayers.submitted", "நன்றி. உங்கள் கருத்துக்காக நாங்கள் ஜெபிப்போம்."),
    ("prayers.wall_title", "ஜெபச் சுவர்"),
    ("prayers.none_yet", "இதுவரை ஜெப விண்ணப்பங்கள் இல்லை."),
    ("prayers.prayed", "ஜெபிக்கப்பட்டது"),
    ("prayers.mark_prayed", "ஜெபிக்கப்பட்டதாகக் குறி"),
    ("prayers.private_badge", "தனிப்பட்டது"),
    // Testimonies
    ("testimonies.title", "சாட்சியங்கள்"),
    ("testimonies.intro", "உங்கள் வாழ்வில் இறைவன் செய்த செயல்களைப் பகிருங்கள்."),
    ("testimonies.form.title", "தலைப்பு"),
    ("testimonies.form.title_ph", "சிறிய தலைப்பு"),
    ("testimonies.form.body", "உங்கள் சாட்சியம்"),
    ("testimonies.form.body_ph", "உங்கள் அனுபவத்தைச் சொல்லுங்கள்…"),
    ("testimonies.submitted", "நன்றி. பரிசீலனைக்குப் பின் உங்கள் சாட்சியம் வெளியிடப்படும்."),
    ("testimonies.none_yet", "இதுவரை சாட்சியங்கள் இல்லை."),
    ("testimonies.pending", "நிலுவையில்"),
    ("testimonies.approved", "அங்கீகரிக்கப்பட்டது"),
    ("testimonies.rejected", "நிராகரிக்கப்பட்டது"),
    ("testimonies.approve", "அங்கீகரி"),
    ("testimonies.reject", "நிராகரி"),
    // Announcements
    ("announcements.title", "அறிவிப்புகள்"),
    ("announcements.none_yet", "தற்போது அறிவிப்புகள் இல்லை."),
    ("announcements.event_date", "நாள்:"),
    ("announcements.form.title", "தலைப்பு"),
    ("announcements.form.body", "விவரங்கள்"),
    ("announcements.form.event_date", "நிகழ்வு நாள் (YYYY-MM-DD)"),
    ("announcements.create", "வெளியிடு"),
    // Gallery
    ("gallery.title", "படத்தொகுப்பு"),
    ("gallery.none_yet", "இதுவரை படங்கள் இல்லை."),
    ("gallery.form.caption", "படக் குறிப்பு"),
    ("gallery.form.file", "படம்"),
    ("gallery.upload", "பதிவேற்று"),
    ("gallery.uploaded", "படம் பதிவேற்றப்பட்டது"),
    ("gallery.no_file", "முதலில் ஒரு படத்தைத் தேர்ந்தெடுக்கவும்."),
    ("gallery.too_large", "படங்கள் அதிகபட்சம் 10 MB இருக்க வேண்டும்."),
    // Livestream
    ("livestream.title", "நேரலை திருப்பலி"),
    ("livestream.live_now", "இப்போது நேரலையில்"),
    ("livestream.offline", "தற்போது நேரலை இல்லை. திருப்பலி நேரங்களைப் பார்க்கவும்."),
    ("livestream.form.title", "நேரலைத் தலைப்பு"),
    ("livestream.form.url", "உட்பொதி இணைப்பு"),
    ("livestream.form.is_live", "தற்போது நேரலையில்"),
    ("livestream.save", "சேமி"),
    // Contact
    ("contact.title", "எங்களைத் தொடர்பு கொள்ள"),
    ("contact.intro", "திருத்தல அலுவலகத்திற்கு எழுதுங்கள். இரண்டு நாட்களுக்குள் பதிலளிப்போம்."),
    ("contact.form.subject", "பொருள்"),
    ("contact.form.message", "செய்தி"),
    ("contact.sent", "உங்கள் செய்தி அனுப்பப்பட்டது."),
    ("contact.address_title", "திருத்தல அலுவலகம்"),
    (
        "contact.office_hours",
        "அலுவலக நேரம்: திங்கள் முதல் சனி வரை, காலை 9:00 முதல் மாலை 5:00 வரை",
    ),
    // Admin
    ("admin.title", "நிர்வாகம்"),
    ("admin.signin", "உள்நுழை"),
    ("admin.username", "பயனர் பெயர்"),
    ("admin.password", "கடவுச்சொல்"),
    ("admin.signout", "வெளியேறு"),
    ("admin.signed_in_as", "உள்நுழைந்தவர்:"),
    ("admin.signin_failed", "உள்நுழைவு தோல்வியடைந்தது"),
    ("admin.messages", "செய்திகள்"),
    ("admin.no_messages", "செய்திகள் இல்லை."),
];
